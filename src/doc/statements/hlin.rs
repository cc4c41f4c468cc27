/*!
# `HLIN <x1>, <x2> AT <y>`

## Purpose
Draw a horizontal line.

## Remarks
All three operands are integer expressions.

## Example
```text
10 HLIN 0, 39 AT 20
```

*/
