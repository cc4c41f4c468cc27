/*!
# `GR`

## Purpose
Switch to low resolution graphics.

## Remarks
Like `END`, `GR` may not be directly followed by a letter or digit.

## Example
```text
10 GR
```

*/
