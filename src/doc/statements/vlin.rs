/*!
# `VLIN <y1>, <y2> AT <x>`

## Purpose
Draw a vertical line.

## Remarks
All three operands are integer expressions.

## Example
```text
10 VLIN 0, 39 AT 20
```

*/
