use super::{Config, Error, Line, LineNumber};
use log::debug;

/// Lines in the order they appeared in the source.
/// Numbers may repeat or go backwards; nothing is sorted or replaced.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Parses a whole listing. Blank lines are skipped.
    /// Every line, the last one included, must end with `\n` or `\r\n`.
    pub fn parse(source: &str, config: Config) -> Result<Program, Error> {
        let mut program = Program::default();
        let mut rest = source;
        let mut row = 0;
        while !rest.is_empty() {
            row += 1;
            let (text, terminated) = match rest.find('\n') {
                Some(index) => {
                    let text = &rest[..index];
                    rest = &rest[index + 1..];
                    (text, true)
                }
                None => (std::mem::take(&mut rest), false),
            };
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text.bytes().all(|ch| ch == b' ') {
                continue;
            }
            let line = Line::parse(text, config).map_err(|e| e.in_row(row))?;
            if !terminated {
                let end = text.len();
                return Err(error!(MissingEndOfLine, ..&(end..end))
                    .in_line_number(line.number())
                    .in_row(row));
            }
            program.push(line);
        }
        Ok(program)
    }

    pub fn push(&mut self, line: Line) {
        if let Some(last) = self.lines.last() {
            if line.number() == last.number() {
                debug!("duplicate line number {}", line.number());
            } else if line.number() < last.number() {
                debug!("line {} follows line {}", line.number(), last.number());
            }
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Every line numbered `number`, in source order.
    pub fn line(&self, number: LineNumber) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.number() == number)
    }

    /// True when line numbers strictly increase.
    pub fn is_ordered(&self) -> bool {
        self.lines
            .windows(2)
            .all(|pair| pair[0].number() < pair[1].number())
    }
}

impl IntoIterator for Program {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl FromIterator<Line> for Program {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut program = Program::default();
        for line in iter {
            program.push(line);
        }
        program
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ast::Statement, ErrorCode};
    use super::*;

    #[test]
    fn test_keeps_source_order() {
        let program = Program::parse("20 END\n10 GR\n20 TEXT\n", Config::default()).unwrap();
        assert_eq!(program.len(), 3);
        let numbers: Vec<LineNumber> = program.iter().map(Line::number).collect();
        assert_eq!(numbers, vec![20, 10, 20]);
        assert!(!program.is_ordered());
        let twenties: Vec<&Line> = program.line(20).collect();
        assert_eq!(twenties.len(), 2);
        assert_eq!(twenties[1].statements(), &[Statement::Text]);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let program = Program::parse("\r\n10 END\r\n   \n\n20 GR\r\n", Config::default()).unwrap();
        assert_eq!(program.len(), 2);
        assert!(program.is_ordered());
        assert!(Program::parse("", Config::default()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_end_of_line() {
        let e = Program::parse("10 END\n20 GR", Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::MissingEndOfLine);
        assert_eq!(e.line_number(), Some(20));
        assert_eq!(e.row(), Some(2));
        assert!(Program::parse("10 END\n   ", Config::default()).is_ok());
    }

    #[test]
    fn test_error_row() {
        let e = Program::parse("10 END\n\n30 PRINT 1+\n", Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnexpectedToken);
        assert_eq!(e.row(), Some(3));
        assert_eq!(e.line_number(), Some(30));
    }
}
