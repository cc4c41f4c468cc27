/*!
# Expressions

Integer and string values never mix. Every expression has one domain,
fixed by how it is written, and a statement asking for one domain rejects
the other with `TYPE MISMATCH`.

## Precedence

From tightest to loosest:

| Operators | |
|-----------|-|
| `( )` | grouping |
| `+ - NOT` | unary |
| `^` | power |
| `* / MOD` | |
| `+ -` | |
| `= # <> < > <= >= AND OR` | relational |

Binary operators group left to right. Unary operators bind tighter than `^`,
so `-2^2` is `(-2)^2`.

## Strings

Strings may only be compared with `=` and `#`. The result is an integer.

```text
IF A$ = "YES" THEN 100
```

A string name may take a slice, `A$(2,4)`, selecting characters two
through four. Integer names may not.

## Functions

| Function | Argument |
|----------|----------|
| `ASC(s$)` `LEN(s$)` | string |
| `SCRN(x, y)` | two integers |
| `ABS PDL PEEK RND SGN` | integer |

Every function returns an integer.

*/
