/*!
# `END`

## Purpose
Stop the program.

## Remarks
`END` may not be directly followed by a letter or digit: `ENDX` is a
`RESERVED WORD IN NAME` error rather than a variable.

## Example
```text
10 PRINT "DONE"
20 END
```

*/
