/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Integer BASIC.

Text goes in one line at a time: [`lex`] turns a line into [`Lexeme`]s,
[`parse`] turns the lexemes into [`ast::Statement`]s, and [`Line`] does both.
[`Program`] assembles whole listings.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;
mod program;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use ident::{Domain, Ident};
pub use lex::{lex, Lexeme, Lexer};
pub use line::Line;
pub use parse::parse;
pub use program::Program;

pub mod ast;
pub mod token;

/// Byte offsets into the source line.
pub type Column = std::ops::Range<usize>;
pub type LineNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Letters fold to upper case before matching.
    #[default]
    Insensitive,
    /// Only upper case letters belong to the language.
    Sensitive,
}

/// Settings fixed for the duration of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub case: CaseMode,
}

impl Config {
    pub fn case_sensitive() -> Config {
        Config {
            case: CaseMode::Sensitive,
        }
    }

    fn is_letter(&self, ch: u8) -> bool {
        match self.case {
            CaseMode::Insensitive => ch.is_ascii_alphabetic(),
            CaseMode::Sensitive => ch.is_ascii_uppercase(),
        }
    }

    fn fold(&self, ch: u8) -> u8 {
        match self.case {
            CaseMode::Insensitive => ch.to_ascii_uppercase(),
            CaseMode::Sensitive => ch,
        }
    }
}
