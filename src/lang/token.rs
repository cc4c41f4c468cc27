pub use super::ident::Ident;

/// Every reserved spelling. Spaces may appear between any two characters
/// of a spelling in source text.
const RESERVED: &[(&str, Keyword)] = &[
    ("ABS(", Keyword::Function(Function::Abs)),
    ("AND", Keyword::Operator(Operator::And)),
    ("ASC(", Keyword::Function(Function::Asc)),
    ("AT", Keyword::Word(Word::At)),
    ("CALL", Keyword::Word(Word::Call)),
    ("COLOR=", Keyword::Word(Word::Color)),
    ("DIM", Keyword::Word(Word::Dim)),
    ("DSP", Keyword::Word(Word::Dsp)),
    ("END", Keyword::Word(Word::End)),
    ("FOR", Keyword::Word(Word::For)),
    ("GOSUB", Keyword::Word(Word::Gosub)),
    ("GOTO", Keyword::Word(Word::Goto)),
    ("GR", Keyword::Word(Word::Gr)),
    ("HLIN", Keyword::Word(Word::Hlin)),
    ("IF", Keyword::Word(Word::If)),
    ("IN#", Keyword::Word(Word::InNumber)),
    ("INPUT", Keyword::Word(Word::Input)),
    ("LEN(", Keyword::Function(Function::Len)),
    ("LET", Keyword::Word(Word::Let)),
    ("LIST", Keyword::Word(Word::List)),
    ("MOD", Keyword::Operator(Operator::Modulus)),
    ("NEXT", Keyword::Word(Word::Next)),
    ("NODSP", Keyword::Word(Word::NoDsp)),
    ("NOT", Keyword::Operator(Operator::Not)),
    ("NOTRACE", Keyword::Word(Word::NoTrace)),
    ("OR", Keyword::Operator(Operator::Or)),
    ("PDL(", Keyword::Function(Function::Pdl)),
    ("PEEK(", Keyword::Function(Function::Peek)),
    ("PLOT", Keyword::Word(Word::Plot)),
    ("POKE", Keyword::Word(Word::Poke)),
    ("POP", Keyword::Word(Word::Pop)),
    ("PR#", Keyword::Word(Word::PrNumber)),
    ("PRINT", Keyword::Word(Word::Print)),
    ("REM", Keyword::Word(Word::Rem)),
    ("RETURN", Keyword::Word(Word::Return)),
    ("RND(", Keyword::Function(Function::Rnd)),
    ("SCRN(", Keyword::Function(Function::Scrn)),
    ("SGN(", Keyword::Function(Function::Sgn)),
    ("STEP", Keyword::Word(Word::Step)),
    ("TAB", Keyword::Word(Word::Tab)),
    ("TEXT", Keyword::Word(Word::Text)),
    ("THEN", Keyword::Word(Word::Then)),
    ("TO", Keyword::Word(Word::To)),
    ("TRACE", Keyword::Word(Word::Trace)),
    ("VLIN", Keyword::Word(Word::Vlin)),
    ("VTAB", Keyword::Word(Word::Vtab)),
    ("<>", Keyword::Operator(Operator::NotEqual)),
    ("<=", Keyword::Operator(Operator::LessEqual)),
    (">=", Keyword::Operator(Operator::GreaterEqual)),
];

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Word(Word),
    Function(Function),
    Operator(Operator),
    Ident(Ident),
    /// Everything after `REM`, verbatim.
    Remark(String),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        RESERVED
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, keyword)| Token::from(*keyword))
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Token {
        match keyword {
            Keyword::Word(w) => Token::Word(w),
            Keyword::Function(f) => Token::Function(f),
            Keyword::Operator(op) => Token::Operator(op),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}(", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
        }
    }
}

/// Which characters may not directly follow a reserved word
/// that starts a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Collision {
    None,
    Letter,
    LetterOrDigit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Word(Word),
    Function(Function),
    Operator(Operator),
}

impl Keyword {
    pub fn reserved() -> impl Iterator<Item = (&'static str, Keyword)> {
        RESERVED.iter().copied()
    }

    /// Words that end an identifier when they show up inside one.
    pub fn is_infix(self) -> bool {
        match self {
            Keyword::Operator(op) => matches!(op, Operator::And | Operator::Modulus | Operator::Or),
            Keyword::Word(word) => matches!(
                word,
                Word::At | Word::For | Word::Goto | Word::Step | Word::Then | Word::To
            ),
            Keyword::Function(_) => false,
        }
    }

    pub fn collision(self) -> Collision {
        match self {
            Keyword::Word(word) => match word {
                Word::End
                | Word::Gr
                | Word::NoTrace
                | Word::Pop
                | Word::Return
                | Word::Text
                | Word::Trace => Collision::LetterOrDigit,
                Word::List => Collision::Letter,
                _ => Collision::None,
            },
            _ => Collision::None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    At,
    Call,
    Color,
    Dim,
    Dsp,
    End,
    For,
    Gosub,
    Goto,
    Gr,
    Hlin,
    If,
    InNumber,
    Input,
    Let,
    List,
    Next,
    NoDsp,
    NoTrace,
    Plot,
    Poke,
    Pop,
    PrNumber,
    Print,
    Rem,
    Return,
    Step,
    Tab,
    Text,
    Then,
    To,
    Trace,
    Vlin,
    Vtab,
}

impl Word {
    /// Clause words only appear inside other statements.
    pub fn starts_statement(self) -> bool {
        use Word::*;
        !matches!(self, At | Step | Then | To)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            At => write!(f, "AT"),
            Call => write!(f, "CALL"),
            Color => write!(f, "COLOR="),
            Dim => write!(f, "DIM"),
            Dsp => write!(f, "DSP"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            Gr => write!(f, "GR"),
            Hlin => write!(f, "HLIN"),
            If => write!(f, "IF"),
            InNumber => write!(f, "IN#"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Next => write!(f, "NEXT"),
            NoDsp => write!(f, "NODSP"),
            NoTrace => write!(f, "NOTRACE"),
            Plot => write!(f, "PLOT"),
            Poke => write!(f, "POKE"),
            Pop => write!(f, "POP"),
            PrNumber => write!(f, "PR#"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Return => write!(f, "RETURN"),
            Step => write!(f, "STEP"),
            Tab => write!(f, "TAB"),
            Text => write!(f, "TEXT"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Trace => write!(f, "TRACE"),
            Vlin => write!(f, "VLIN"),
            Vtab => write!(f, "VTAB"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Abs,
    Asc,
    Len,
    Pdl,
    Peek,
    Rnd,
    Scrn,
    Sgn,
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        match self {
            Abs => write!(f, "ABS"),
            Asc => write!(f, "ASC"),
            Len => write!(f, "LEN"),
            Pdl => write!(f, "PDL"),
            Peek => write!(f, "PEEK"),
            Rnd => write!(f, "RND"),
            Scrn => write!(f, "SCRN"),
            Sgn => write!(f, "SGN"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    Hash,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl Operator {
    pub fn from_char(ch: u8) -> Option<Operator> {
        use Operator::*;
        Some(match ch {
            b'^' => Caret,
            b'*' => Multiply,
            b'/' => Divide,
            b'+' => Plus,
            b'-' => Minus,
            b'=' => Equal,
            b'#' => Hash,
            b'<' => Less,
            b'>' => Greater,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "MOD"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Hash => write!(f, "#"),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}
