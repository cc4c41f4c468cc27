/*!
# `VTAB <row>`

## Purpose
Move the cursor to a row.

## Remarks
The row is an integer expression.

## Example
```text
10 VTAB 12
```

*/
