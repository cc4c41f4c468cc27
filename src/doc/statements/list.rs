/*!
# `LIST [<from> [, <to>]]`

## Purpose
Show the program.

## Remarks
The line numbers are literals, not expressions.

## Example
```text
LIST 10, 100
```

*/
