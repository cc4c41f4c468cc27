/*!
# `IF <expression> THEN <statement>`
Also `IF <expression> THEN <line number>`.

## Purpose
Do something contingent on a predicate.

## Remarks
The predicate is an integer expression. When the word after `THEN` starts a
statement, or is a variable starting an assignment, the statement is parsed.
Anything else is a line number expression to jump to. `THEN N` therefore
reads as the start of an assignment to `N`; write `THEN (N)` to jump.

## Example
```text
10 IF A < 30 THEN PRINT A
20 IF A$ = "Y" THEN 100
```

*/
