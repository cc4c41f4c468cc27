/*!
# `TRACE`

## Purpose
Print each line number as it runs.

## Remarks
`TRACE` may not be directly followed by a letter or digit.

## Example
```text
10 TRACE
```

*/
