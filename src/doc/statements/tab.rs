/*!
# `TAB <column>`

## Purpose
Move the cursor to a column.

## Remarks
`TAB` is a statement in Integer BASIC, not a function.

## Example
```text
10 TAB 10: PRINT "X"
```

*/
