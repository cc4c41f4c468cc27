/*!
# `REM <remark>`

## Purpose
Leave a remark in the program.

## Remarks
Everything after `REM` up to the end of the line is kept verbatim. Colons
in a remark do not start a new statement.

## Example
```text
10 REM THIS IS: ALL ONE REMARK
```

*/
