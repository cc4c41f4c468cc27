/*!
# `GOTO <line number>`

## Purpose
Move execution to another line.

## Remarks
`GO TO` with a space is the same word. The line number is an integer
expression.

## Example
```text
10 GOTO 30
20 PRINT "SKIPPED"
30 GOTO 10 * N
```

*/
