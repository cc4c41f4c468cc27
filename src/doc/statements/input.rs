/*!
# `INPUT ["<prompt>",] <variable>[,<variable>...]`

## Purpose
Wait for a response from the keyboard.

## Remarks
The optional prompt is a string literal followed by a comma. Variables may
be integer or string, with subscripts, and string slices are accepted.

## Example
```text
10 INPUT "NAME", N$
20 INPUT A, B(2), C$(1,3)
```

*/
