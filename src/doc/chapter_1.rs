/*!
# Lexical Rules

## Spaces

Spaces separate tokens but are never required, and any number of them may
appear inside a reserved word. `GO TO`, `G O T O` and `GOTO` are the same
word. Digits of a number may be spaced too: `1 0 0` is one hundred. Only
the space character counts; a tab is an `UNMATCHED CHARACTER`.

A spaced word gives way when one of its later letters starts another
reserved word, at least as long, that runs past it. That is why
`IF A THEN 10` and `IF A T H E N 10` read the variable `A` followed by
`THEN`, not `AT` followed by `HEN`, while `P R I N T ABS(X)` still prints.

## Case

By default letters fold to upper case, so `print x` and `PRINT X` are the
same line. In case sensitive mode only upper case letters belong to the
language; lower case is allowed only inside strings and remarks.

## Reserved words

```text
CALL COLOR= DIM DSP END FOR GOSUB GOTO GR HLIN IF IN# INPUT LET LIST
NEXT NODSP NOTRACE PLOT POKE POP PR# PRINT REM RETURN TAB TEXT TRACE
VLIN VTAB AT STEP THEN TO AND MOD NOT OR
ABS( ASC( LEN( PDL( PEEK( RND( SCRN( SGN(
```

A function name includes its parenthesis. Without it, `ABS` is an
ordinary variable.

Reserved words win over variable names. Inside a name, the words
`AND AT FOR GOTO MOD OR STEP THEN TO` end the name: `XANDY` is `X AND Y`.
Some words may not be directly followed by letters at all, because the
result could only be a name that the ROM would misread. These are
`RESERVED WORD IN NAME` errors:

| Word | Not followed by |
|------|-----------------|
| `END GR NOTRACE POP RETURN TEXT TRACE` | letter or digit |
| `LIST` | letter |

Other words may touch what follows them. `LETTER=1` assigns to `TER`,
`FORI=1TON` is a loop and `IFA>1THENPRINT` prints. A name that starts
with one of these words is split by it, so `TOP=1` reads as `TO P=1` and
fails as an unrecognized statement.

## Literals

Numbers are unsigned decimal integers; a leading `-` is an operator.
Strings are quoted with `"` and can not contain one. Control characters
other than NUL, line feed and carriage return may appear in strings.

## Names

A letter, then letters and digits. A trailing `$` makes it a string name.
`A` and `A$` are different variables.

*/
