/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value to a variable.

## Remarks
The word `LET` is optional. Both sides must be in the same domain. A string
slice can not be assigned to.

## Example
```text
10 LET A = 5
20 B$ = "HELLO"
30 C(I) = A * 2
```

*/
