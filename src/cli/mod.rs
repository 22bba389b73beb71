//! CLI module for the Cooke front end
//!
//! This module provides the command-line interface around the lexer and grammar engine.
//!
//! ## Commands
//!
//! - `<file>` - Validate a program (default action)
//! - `parse <file>` - Validate a program
//! - `lex <file>` - List every token as `<lexeme> <TOKEN_KIND_NAME>`
//!
//! ## Exit codes
//!
//! | code | meaning                     |
//! |------|-----------------------------|
//! | 0    | validated / listing printed |
//! | 1    | validation failed           |
//! | 2    | no input provided           |
//! | 3    | input unreadable            |
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use cooke_syntax::config::{LineTracking, ParserConfig, ProgramShape};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The program was read but did not validate.
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const NO_INPUT: ExitCode = ExitCode(2);
    pub const UNREADABLE: ExitCode = ExitCode(3);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexical analyzer and syntax validator for the Cooke language
#[derive(Parser, Debug)]
#[command(name = "cooke")]
#[command(version = VERSION)]
#[command(about = "Lexical analyzer and syntax validator for the Cooke language", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to validate (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub options: ParseOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a program against the grammar
    Parse {
        /// Source file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        options: ParseOptions,
    },

    /// Print each token as `<lexeme> <TOKEN_KIND_NAME>`
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Grammar engine switches shared by the default action and `parse`.
#[derive(Args, Debug, Clone, Default)]
pub struct ParseOptions {
    /// Accept a sequence of statements instead of exactly one
    #[arg(long)]
    pub statements: bool,

    /// Report every error on line 1 (classic line numbering)
    #[arg(long = "fixed-lines")]
    pub fixed_lines: bool,
}

impl ParseOptions {
    /// Build the parser configuration these switches describe.
    pub fn to_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new();
        if self.statements {
            config = config.with_program_shape(ProgramShape::StatementList);
        }
        if self.fixed_lines {
            config = config.with_line_tracking(LineTracking::Fixed);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Parse { file, options }) => commands::parse_file(&file, options.to_config()),
        Some(Command::Lex { file }) => commands::lex_file(&file),
        None => match cli.file {
            Some(file) => commands::parse_file(&file, cli.options.to_config()),
            None => Err(CliError::new("Error: No input file provided.", ExitCode::NO_INPUT)),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["cooke", "prog.ck"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("prog.ck")));
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["cooke", "lex", "prog.ck"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lex { .. })));
    }

    #[test]
    fn test_cli_parse_subcommand_flags() {
        let cli = Cli::try_parse_from(["cooke", "parse", "prog.ck", "--statements", "--fixed-lines"]).unwrap();
        if let Some(Command::Parse { options, .. }) = cli.command {
            let config = options.to_config();
            assert_eq!(config.program_shape, ProgramShape::StatementList);
            assert_eq!(config.line_tracking, LineTracking::Fixed);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_default_action_flags() {
        let cli = Cli::try_parse_from(["cooke", "prog.ck", "--statements"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.options.to_config().program_shape, ProgramShape::StatementList);
    }

    #[test]
    fn test_flags_before_subcommand_are_rejected() {
        // Root flags would otherwise be parsed and then ignored by `parse`.
        assert!(Cli::try_parse_from(["cooke", "--statements", "parse", "prog.ck"]).is_err());
        assert!(Cli::try_parse_from(["cooke", "--fixed-lines", "lex", "prog.ck"]).is_err());
    }

    #[test]
    fn test_default_options_match_default_config() {
        let config = ParseOptions::default().to_config();
        assert_eq!(config.program_shape, ProgramShape::SingleStatement);
        assert_eq!(config.line_tracking, LineTracking::Separators);
    }

    #[test]
    fn test_lex_requires_file() {
        assert!(Cli::try_parse_from(["cooke", "lex"]).is_err());
    }

    #[test]
    fn test_missing_input_is_exit_code_two() {
        let cli = Cli::try_parse_from(["cooke"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::NO_INPUT);
        assert_eq!(err.message, "Error: No input file provided.");
    }

    #[test]
    fn test_unreadable_input_is_exit_code_three() {
        let cli = Cli::try_parse_from(["cooke", "definitely/not/here.ck"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::UNREADABLE);
        assert!(err.message.starts_with("Error: Could not open file"));
    }
}
