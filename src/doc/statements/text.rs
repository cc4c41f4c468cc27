/*!
# `TEXT`

## Purpose
Switch to the text screen.

## Remarks
`TEXT` may not be directly followed by a letter or digit.

## Example
```text
10 TEXT
```

*/
