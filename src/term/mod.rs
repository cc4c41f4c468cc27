use ansi_term::Style;
use intbasic::lang::ast::{AcceptVisitor, Visitor};
use intbasic::lang::{lex, Column, Config, Error, Ident, Line, Program};
use linefeed::{Interface, ReadResult, Signal};
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Reads lines from the terminal and shows what they parse to.
pub fn main(config: Config) -> Result<()> {
    let command = Interface::new("intbasic")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.set_prompt("]")?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                command.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.bytes().all(|ch| ch == b' ') {
            continue;
        }
        command.add_history_unique(string.clone());
        match Line::parse(&string, config) {
            Ok(line) => {
                for statement in line.statements() {
                    command.write_fmt(format_args!("{:?}\n", statement))?;
                }
            }
            Err(error) => {
                command.write_fmt(format_args!("{}\n", bold(&error)))?;
                command.write_fmt(format_args!(
                    "{}\n",
                    decorate_list(&string, &[error.column()])
                ))?;
            }
        }
    }
    Ok(())
}

pub fn check(file: &Path, config: Config) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    let program = load(&source, config)?;
    let statements: usize = program.iter().map(|line| line.statements().len()).sum();
    println!("{} lines, {} statements", program.len(), statements);
    if !program.is_ordered() {
        println!("line numbers out of order or repeated");
    }
    let mut names = Names::default();
    program.accept(&mut names);
    if !names.0.is_empty() {
        let names: Vec<String> = names.0.into_iter().collect();
        println!("{}", names.join(" "));
    }
    Ok(())
}

pub fn tree(file: &Path, config: Config) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    let program = load(&source, config)?;
    println!("{:#?}", program);
    Ok(())
}

pub fn tokens(file: &Path, config: Config) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    for (index, text) in source.lines().enumerate() {
        if text.bytes().all(|ch| ch == b' ') {
            continue;
        }
        let (number, lexemes) = match lex(text, config) {
            Ok(lexed) => lexed,
            Err(error) => {
                report(text, &error);
                return Err(Box::new(error.in_row(index + 1)));
            }
        };
        let spelled: Vec<String> = lexemes
            .iter()
            .map(|l| format!("{}@{}..{}", l.text(), l.column.start, l.column.end))
            .collect();
        println!("{} {}", number, spelled.join(" "));
    }
    Ok(())
}

/// Parses the whole program, showing the offending row on failure.
fn load(source: &str, config: Config) -> Result<Program> {
    match Program::parse(source, config) {
        Ok(program) => {
            debug!("loaded {} lines", program.len());
            Ok(program)
        }
        Err(error) => {
            if let Some(text) = error.row().and_then(|row| source.lines().nth(row - 1)) {
                report(text, &error);
            }
            Err(Box::new(error))
        }
    }
}

fn report(text: &str, error: &Error) {
    println!("{}", decorate_list(text, &[error.column()]));
}

fn bold(error: &Error) -> String {
    Style::new().bold().paint(error.to_string()).to_string()
}

#[derive(Default)]
struct Names(BTreeSet<String>);

impl Visitor for Names {
    fn visit_ident(&mut self, ident: &Ident) {
        self.0.insert(ident.to_string());
    }
}

/// Underlines `columns` of `ins`. Columns are byte offsets; one at the
/// very end underlines a trailing space.
fn decorate_list(ins: &str, columns: &[Column]) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    for (index, ch) in ins.char_indices() {
        let do_under = columns.iter().any(|c| c.contains(&index));
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
    }
    if columns.iter().any(|c| c.start == ins.len()) {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
