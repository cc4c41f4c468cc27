/*!
# `DSP <name>`

## Purpose
Display a variable every time it is assigned.

## Remarks
The name takes no subscript. Either domain may be watched.

## Example
```text
10 DSP I
20 DSP N$
```

*/
