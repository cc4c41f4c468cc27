/*!
# `POKE <address>, <value>`

## Purpose
Store a byte in memory.

## Remarks
Both operands are integer expressions.

## Example
```text
10 POKE -16368, 0
```

*/
