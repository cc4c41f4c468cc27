/*!
# `RETURN`

## Purpose
Return from a subroutine.

## Remarks
`RETURN` may not be directly followed by a letter or digit.

## Example
```text
100 RETURN
```

*/
