/*!
# `COLOR= <color>`

## Purpose
Select the color for PLOT, HLIN and VLIN.

## Remarks
`COLOR=` is one word. `COLOR = 3` with spaces is the same statement.

## Example
```text
10 GR
20 COLOR=13
30 PLOT 20,20
```

*/
