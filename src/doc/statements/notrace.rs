/*!
# `NOTRACE`

## Purpose
Stop line number tracing.

## Remarks
The counterpart of `TRACE`.

## Example
```text
10 NOTRACE
```

*/
