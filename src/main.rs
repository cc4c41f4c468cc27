//! # intbasic
//!
//! Lex and parse Apple II Integer BASIC.
//!
//! ```bash
//! # Interactive: type numbered lines, see their statements
//! intbasic
//!
//! # Parse a whole program and summarize it
//! intbasic check program.bas
//!
//! # Show the syntax tree or the tokens of each line
//! intbasic tree program.bas
//! intbasic tokens program.bas
//! ```

use clap::{Parser, Subcommand};
use intbasic::lang::Config;
use std::path::PathBuf;

mod term;

#[derive(Parser)]
#[command(name = "intbasic")]
#[command(about = "Lexer and parser for Apple II Integer BASIC")]
#[command(version)]
struct Cli {
    /// Treat lower case letters as foreign to the language
    #[arg(long)]
    case_sensitive: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a program and report its size and variables
    Check {
        /// Path to the program text
        file: PathBuf,
    },

    /// Parse a program and print its syntax tree
    Tree {
        /// Path to the program text
        file: PathBuf,
    },

    /// Print the tokens of every line
    Tokens {
        /// Path to the program text
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let config = if cli.case_sensitive {
        Config::case_sensitive()
    } else {
        Config::default()
    };

    let result = match cli.command {
        None => term::main(config),
        Some(Commands::Check { file }) => term::check(&file, config),
        Some(Commands::Tree { file }) => term::tree(&file, config),
        Some(Commands::Tokens { file }) => term::tokens(&file, config),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
