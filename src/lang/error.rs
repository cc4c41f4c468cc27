use super::{Column, LineNumber};

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    row: Option<usize>,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            row: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    /// One-based row of the source text, set when parsing a whole program.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_row(self, row: usize) -> Error {
        Error {
            row: Some(row),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lex,
    Expr,
    Stmt,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnmatchedCharacter = 1,
    UnterminatedString = 2,
    ReservedWordCollision = 3,
    NumberOverflow = 4,
    DomainMismatch = 10,
    UnknownFunction = 11,
    UnbalancedParenthesis = 12,
    UnexpectedToken = 13,
    UnrecognizedStatement = 20,
    MalformedOperands = 21,
    TargetMismatch = 22,
    MissingLineNumber = 30,
    DanglingSeparator = 31,
    MissingEndOfLine = 32,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnmatchedCharacter | UnterminatedString | ReservedWordCollision | NumberOverflow => {
                ErrorKind::Lex
            }
            DomainMismatch | UnknownFunction | UnbalancedParenthesis | UnexpectedToken => {
                ErrorKind::Expr
            }
            UnrecognizedStatement | MalformedOperands | TargetMismatch => ErrorKind::Stmt,
            MissingLineNumber | DanglingSeparator | MissingEndOfLine => ErrorKind::Line,
        }
    }

    fn text(self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnmatchedCharacter => "UNMATCHED CHARACTER",
            UnterminatedString => "UNTERMINATED STRING",
            ReservedWordCollision => "RESERVED WORD IN NAME",
            NumberOverflow => "NUMBER TOO LARGE",
            DomainMismatch => "TYPE MISMATCH",
            UnknownFunction => "UNKNOWN FUNCTION",
            UnbalancedParenthesis => "UNBALANCED PARENTHESIS",
            UnexpectedToken => "UNEXPECTED TOKEN",
            UnrecognizedStatement => "SYNTAX ERROR",
            MalformedOperands => "BAD OPERANDS",
            TargetMismatch => "TARGET TYPE MISMATCH",
            MissingLineNumber => "MISSING LINE NUMBER",
            DanglingSeparator => "DANGLING SEPARATOR",
            MissingEndOfLine => "MISSING END OF LINE",
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        } else if let Some(row) = self.row {
            suffix.push_str(&format!(" ROW {}", row));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code.text())
        } else {
            write!(f, "{} IN{}", self.code.text(), suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(ErrorCode::UnterminatedString.kind(), ErrorKind::Lex);
        assert_eq!(ErrorCode::DomainMismatch.kind(), ErrorKind::Expr);
        assert_eq!(ErrorCode::TargetMismatch.kind(), ErrorKind::Stmt);
        assert_eq!(ErrorCode::DanglingSeparator.kind(), ErrorKind::Line);
    }

    #[test]
    fn test_display() {
        let e = error!(DomainMismatch, ..&(3..6); "EXPECTED INTEGER EXPRESSION");
        assert_eq!(
            e.to_string(),
            "TYPE MISMATCH IN (3..6); EXPECTED INTEGER EXPRESSION"
        );
        let e = e.in_line_number(10);
        assert_eq!(
            e.to_string(),
            "TYPE MISMATCH IN 10 (3..6); EXPECTED INTEGER EXPRESSION"
        );
        assert_eq!(error!(MissingEndOfLine).to_string(), "MISSING END OF LINE");
        assert_eq!(
            error!(MissingLineNumber).in_row(4).to_string(),
            "MISSING LINE NUMBER IN ROW 4"
        );
    }
}
