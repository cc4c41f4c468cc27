use super::token::{Collision, Keyword, Literal, Operator, Token, Word};
use super::{Column, Config, Error, Ident, LineNumber};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// Lexes a numbered line. Columns are offsets into `s`.
pub fn lex(s: &str, config: Config) -> Result<(LineNumber, Vec<Lexeme>)> {
    let mut lexer = Lexer::new(s, config);
    let line_number = lexer.line_number()?;
    let lexemes = lexer
        .collect::<Result<Vec<Lexeme>>>()
        .map_err(|e| e.in_line_number(line_number))?;
    trace!("line {}: {} lexemes", line_number, lexemes.len());
    Ok((line_number, lexemes))
}

#[derive(Debug, PartialEq, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub column: Column,
}

impl Lexeme {
    /// Upper case, interior spaces removed.
    pub fn text(&self) -> String {
        self.token.to_string()
    }
}

fn is_basic_whitespace(c: u8) -> bool {
    c == b' '
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_string_char(c: u8) -> bool {
    match c {
        b'"' => false,
        0x20..=0x7e => true,
        0x01..=0x09 | 0x0b | 0x0c | 0x0e..=0x1f => true,
        _ => false,
    }
}

#[derive(Debug)]
struct Match {
    keyword: Keyword,
    start: usize,
    end: usize,
    len: usize,
    gaps: Vec<usize>,
}

impl Match {
    fn lexeme(&self) -> Lexeme {
        Lexeme {
            token: Token::from(self.keyword),
            column: self.start..self.end,
        }
    }
}

pub struct Lexer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    config: Config,
    pending: Option<Match>,
    remark: bool,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, config: Config) -> Lexer<'a> {
        Lexer {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            config,
            pending: None,
            remark: false,
            failed: false,
        }
    }

    /// Consumes the leading line number: digits with any spaces among them.
    pub fn line_number(&mut self) -> Result<LineNumber> {
        self.skip_whitespace();
        let start = self.pos;
        match self.bytes.get(start) {
            Some(&ch) if is_basic_digit(ch) => {}
            _ => {
                let len = self.text[start..].chars().next().map_or(0, char::len_utf8);
                return Err(error!(MissingLineNumber, ..&(start..start + len)));
            }
        }
        let digits = self.digits();
        let column = start..self.pos;
        digits
            .parse::<LineNumber>()
            .map_err(|_| error!(NumberOverflow, ..&column; "LINE NUMBER TOO LARGE"))
    }

    fn lexeme(&mut self) -> Option<Result<Lexeme>> {
        if let Some(m) = self.pending.take() {
            self.pos = m.end;
            return Some(Ok(m.lexeme()));
        }
        if self.remark {
            self.remark = false;
            if self.pos >= self.text.len() {
                return None;
            }
            let column = self.pos..self.text.len();
            self.pos = self.text.len();
            let remark = self.text[column.clone()].to_string();
            return Some(Ok(Lexeme {
                token: Token::Remark(remark),
                column,
            }));
        }
        self.skip_whitespace();
        let ch = *self.bytes.get(self.pos)?;
        if ch == b'"' {
            return Some(self.string());
        }
        if is_basic_digit(ch) {
            return Some(self.number());
        }
        if self.config.is_letter(ch) {
            return Some(self.alphabetic());
        }
        Some(self.minutia())
    }

    fn skip_whitespace(&mut self) {
        self.pos = self.spaces_from(self.pos);
    }

    fn spaces_from(&self, mut pos: usize) -> usize {
        while let Some(&ch) = self.bytes.get(pos) {
            if !is_basic_whitespace(ch) {
                break;
            }
            pos += 1;
        }
        pos
    }

    /// Spaces after the last digit are not part of the run.
    fn digits(&mut self) -> String {
        let mut s = String::new();
        loop {
            s.push(char::from(self.bytes[self.pos]));
            self.pos += 1;
            let next = self.spaces_from(self.pos);
            match self.bytes.get(next) {
                Some(&ch) if is_basic_digit(ch) => self.pos = next,
                _ => break,
            }
        }
        s
    }

    fn number(&mut self) -> Result<Lexeme> {
        let start = self.pos;
        let digits = self.digits();
        let column = start..self.pos;
        match digits.parse::<i64>() {
            Ok(n) => Ok(Lexeme {
                token: Token::Literal(Literal::Integer(n)),
                column,
            }),
            Err(_) => Err(error!(NumberOverflow, ..&column)),
        }
    }

    fn string(&mut self) -> Result<Lexeme> {
        let start = self.pos;
        let mut s = String::new();
        self.pos += 1;
        loop {
            let ch = match self.bytes.get(self.pos) {
                Some(&ch) => ch,
                None => return Err(error!(UnterminatedString, ..&(start..self.pos))),
            };
            if ch == b'"' {
                self.pos += 1;
                return Ok(Lexeme {
                    token: Token::Literal(Literal::String(s)),
                    column: start..self.pos,
                });
            }
            if !is_string_char(ch) {
                return Err(self.unmatched());
            }
            s.push(char::from(ch));
            self.pos += 1;
        }
    }

    fn alphabetic(&mut self) -> Result<Lexeme> {
        if let Some(m) = self.reserved(self.pos, false) {
            self.check_collision(&m)?;
            self.pos = m.end;
            if m.keyword == Keyword::Word(Word::Rem) {
                self.remark = true;
            }
            return Ok(m.lexeme());
        }
        self.identifier()
    }

    /// An infix word inside the name ends it; the word becomes the next lexeme.
    fn identifier(&mut self) -> Result<Lexeme> {
        let start = self.pos;
        let mut s = String::new();
        s.push(char::from(self.config.fold(self.bytes[self.pos])));
        self.pos += 1;
        while let Some(&ch) = self.bytes.get(self.pos) {
            if self.config.is_letter(ch) {
                if let Some(m) = self.reserved(self.pos, true) {
                    self.pending = Some(m);
                    break;
                }
            } else if !is_basic_digit(ch) {
                break;
            }
            s.push(char::from(self.config.fold(ch)));
            self.pos += 1;
        }
        let ident = if self.bytes.get(self.pos) == Some(&b'$') {
            self.pos += 1;
            Ident::String(s)
        } else {
            Ident::Integer(s)
        };
        Ok(Lexeme {
            token: Token::Ident(ident),
            column: start..self.pos,
        })
    }

    fn minutia(&mut self) -> Result<Lexeme> {
        if let Some(m) = self.reserved(self.pos, false) {
            self.pos = m.end;
            return Ok(m.lexeme());
        }
        let ch = self.bytes[self.pos];
        let token = match ch {
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b',' => Token::Comma,
            b':' => Token::Colon,
            b';' => Token::Semicolon,
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => return Err(self.unmatched()),
            },
        };
        let column = self.pos..self.pos + 1;
        self.pos += 1;
        Ok(Lexeme { token, column })
    }

    fn unmatched(&self) -> Error {
        let len = self.text[self.pos..].chars().next().map_or(1, char::len_utf8);
        error!(UnmatchedCharacter, ..&(self.pos..self.pos + len))
    }

    /// Longest reserved spelling at `pos`. Inside identifiers only
    /// infix words count and they must be written without spaces.
    fn reserved(&self, pos: usize, infix_only: bool) -> Option<Match> {
        let mut best: Option<Match> = None;
        for (spelling, keyword) in Keyword::reserved() {
            if infix_only && !keyword.is_infix() {
                continue;
            }
            let m = match self.spell(pos, spelling, keyword, !infix_only) {
                Some(m) => m,
                None => continue,
            };
            if !m.gaps.is_empty() && self.overtaken(&m) {
                continue;
            }
            if best.as_ref().map_or(true, |b| m.len > b.len) {
                best = Some(m);
            }
        }
        best
    }

    fn spell(&self, pos: usize, spelling: &str, keyword: Keyword, spaced: bool) -> Option<Match> {
        let mut end = pos;
        let mut gaps = vec![];
        for (index, want) in spelling.bytes().enumerate() {
            if index > 0 && spaced {
                let next = self.spaces_from(end);
                if next > end {
                    gaps.push(next);
                    end = next;
                }
            }
            let got = *self.bytes.get(end)?;
            if self.config.fold(got) != want {
                return None;
            }
            end += 1;
        }
        Some(Match {
            keyword,
            start: pos,
            end,
            len: spelling.len(),
            gaps,
        })
    }

    /// `A THEN` is not `AT HEN`: a spaced match gives way to a word at least
    /// as long that starts after one of its spaces and runs past its end.
    /// `P R I N T ABS(` keeps `PRINT` since `TAB` is shorter.
    fn overtaken(&self, m: &Match) -> bool {
        m.gaps.iter().any(|&gap| {
            Keyword::reserved().any(|(spelling, keyword)| {
                keyword != m.keyword
                    && spelling.len() >= m.len
                    && self
                        .spell(gap, spelling, keyword, true)
                        .map_or(false, |other| other.end > m.end)
            })
        })
    }

    fn check_collision(&self, m: &Match) -> Result<()> {
        let next = match self.bytes.get(m.end) {
            Some(&ch) => ch,
            None => return Ok(()),
        };
        let collides = match m.keyword.collision() {
            Collision::None => false,
            Collision::Letter => self.config.is_letter(next),
            Collision::LetterOrDigit => self.config.is_letter(next) || is_basic_digit(next),
        };
        if !collides {
            return Ok(());
        }
        let mut end = m.end;
        while let Some(&ch) = self.bytes.get(end) {
            if !self.config.is_letter(ch) && !is_basic_digit(ch) {
                break;
            }
            end += 1;
        }
        Err(error!(ReservedWordCollision, ..&(m.start..end)))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Lexeme>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let lexeme = self.lexeme();
        if let Some(Err(_)) = lexeme {
            self.failed = true;
        }
        lexeme
    }
}
