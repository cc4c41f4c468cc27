/*!
# `FOR <name> = <from> TO <to> [STEP <step>]`

## Purpose
Begin a loop.

## Remarks
The loop variable must be an integer name. A string name is a
`TARGET TYPE MISMATCH`.

## Example
```text
10 FOR I = 1 TO 10 STEP 2: PRINT I: NEXT I
```

*/
