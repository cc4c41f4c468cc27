/*!
# `PLOT <x>, <y>`

## Purpose
Plot a point in low resolution graphics.

## Remarks
Both operands are integer expressions.

## Example
```text
10 PLOT 10, 20
```

*/
