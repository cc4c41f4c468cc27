/*!
# `NEXT <name>[,<name>...]`

## Purpose
End a loop.

## Remarks
All names must be integer names.

## Example
```text
10 NEXT J, I
```

*/
