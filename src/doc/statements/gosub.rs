/*!
# `GOSUB <line number>`

## Purpose
Call a subroutine.

## Remarks
The line number is an integer expression, so computed calls are allowed.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "HI": RETURN
```

*/
