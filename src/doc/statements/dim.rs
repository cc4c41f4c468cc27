/*!
# `DIM <name>(<size>)[,<name>(<size>)...]`

## Purpose
Declare arrays and string lengths.

## Remarks
Each size is an integer expression. Integer and string names may be mixed
in one `DIM`. A string size is a `TARGET TYPE MISMATCH`.

## Example
```text
10 DIM A(20), N$(30)
```

*/
