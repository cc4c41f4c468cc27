/*!
# `NODSP <name>`

## Purpose
Stop displaying a variable.

## Remarks
The counterpart of `DSP`.

## Example
```text
10 NODSP I
```

*/
