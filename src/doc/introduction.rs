/*!
# Reading Integer BASIC

Integer BASIC was typed into an Apple II one numbered line at a time.
The ROM tokenized each line as it was entered, and its tokenizer was
forgiving in ways a modern scanner is not. This crate reproduces those
rules and builds a syntax tree instead of ROM tokens.

```text
10 FOR I = 1 TO 10: PRINT I: NEXT I
```

becomes one [`Line`](crate::lang::Line) numbered 10 holding three
statements.

```
use intbasic::lang::{ast::*, Config, Ident, Line};

let line = Line::parse("10 FOR I = 1 TO 10: PRINT I: NEXT I", Config::default()).unwrap();
let i = Ident::Integer("I".to_string());
assert_eq!(line.number(), 10);
assert_eq!(
    line.statements()[2],
    Statement::Next(vec![i]),
);
```

Whole listings go through [`Program::parse`](crate::lang::Program::parse).
Lines are kept in the order they were written. Numbers may repeat or run
backwards; deciding which copy of a line wins is left to whoever runs the
program.

Parsing stops at the first error. The error knows its line number once
that has been read, the columns it covers, and the row of the listing.

```text
MISSING END OF LINE IN 20 (5..5)
UNTERMINATED STRING IN 10 (9..22)
```

*/
