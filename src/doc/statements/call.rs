/*!
# `CALL <address>`

## Purpose
Transfer control to a machine language routine.

## Remarks
The address is an integer expression. Negative addresses reach the upper half of memory.

## Example
```text
10 CALL -936
```

*/
