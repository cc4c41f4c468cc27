/*!
# `PRINT [<expression>][{,|;}[<expression>]...]`

## Purpose
Print to the screen.

## Remarks
Integer and string expressions may be freely mixed. A comma advances to the
next tab column. A semicolon joins items. A trailing separator suppresses the
end of line.

## Example
```text
10 PRINT "A="; A, "B="; B;
```

*/
