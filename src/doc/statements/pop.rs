/*!
# `POP`

## Purpose
Forget the most recent GOSUB return address.

## Remarks
`POP` may not be directly followed by a letter or digit.

## Example
```text
10 POP
```

*/
