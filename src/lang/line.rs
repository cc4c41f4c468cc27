use super::ast::Statement;
use super::{lex, parse, Config, Error, LineNumber};
use log::debug;

/// A numbered line and its `:`-separated statements.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    statements: Vec<Statement>,
}

impl Line {
    /// Lexes and parses one line. A single trailing `\n` or `\r\n` is allowed.
    pub fn parse(s: &str, config: Config) -> Result<Line, Error> {
        let s = match s.strip_suffix('\n') {
            Some(s) => s.strip_suffix('\r').unwrap_or(s),
            None => s,
        };
        let (number, lexemes) = lex(s, config)?;
        let statements = parse(number, &lexemes)?;
        debug!("line {}: {} statements", number, statements.len());
        Ok(Line { number, statements })
    }

    pub fn new(number: LineNumber, statements: Vec<Statement>) -> Line {
        Line { number, statements }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::super::ErrorCode;
    use super::*;

    #[test]
    fn test_terminators() {
        let a = Line::parse("10 END", Config::default()).unwrap();
        let b = Line::parse("10 END\n", Config::default()).unwrap();
        let c = Line::parse("10 END\r\n", Config::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.number(), 10);
        assert_eq!(a.statements(), &[Statement::End]);
    }

    #[test]
    fn test_missing_line_number() {
        let e = Line::parse("END", Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::MissingLineNumber);
        assert_eq!(e.line_number(), None);
    }

    #[test]
    fn test_errors_carry_line_number() {
        let e = Line::parse("20 PRINT \"OPEN", Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnterminatedString);
        assert_eq!(e.line_number(), Some(20));
        assert_eq!(e.column(), 9..14);
    }
}
