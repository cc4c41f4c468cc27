//! # Integer BASIC
//!
//! A lexer and parser for the BASIC that came in the ROM of the Apple II.
//!
//! Source text goes in; a [`Program`](lang::Program) of numbered lines,
//! each holding a tree of statements, comes out. Nothing is executed.
//! The tree is for interpreters, pretty printers, and renumbering tools
//! to walk.
//!
//! ```
//! use intbasic::lang::{Config, Program};
//!
//! let program = Program::parse("10 PRINT \"HELLO\"\n20 GOTO 10\n", Config::default()).unwrap();
//! assert_eq!(program.len(), 2);
//! ```
//!
//! The binary is a small front end. With no arguments it reads lines
//! from the terminal and shows what each parses to. `intbasic check FILE`,
//! `intbasic tree FILE` and `intbasic tokens FILE` work on whole listings.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
