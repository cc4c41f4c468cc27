/*!
# `PR# <slot>`

## Purpose
Send output to a peripheral slot.

## Remarks
The slot is an integer expression.

## Example
```text
10 PR# 1
```

*/
