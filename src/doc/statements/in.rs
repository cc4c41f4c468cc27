/*!
# `IN# <slot>`

## Purpose
Take input from a peripheral slot.

## Remarks
The slot is an integer expression.

## Example
```text
10 IN# 2
```

*/
