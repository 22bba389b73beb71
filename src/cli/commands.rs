//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::Diagnostic;

use cooke_syntax::config::ParserConfig;
use cooke_syntax::diagnostics::{SourceError, WriterSink};
use cooke_syntax::parser::{self, Verdict};
use cooke_syntax::{lexer, source};

use super::{CliError, CliResult, ExitCode};

/// Banner printed before validation output.
const PARSER_BANNER: &str = "Cooke Parser ::";

// ============================================================================
// Source loading
// ============================================================================

/// Read source file contents.
///
/// ## Errors
///
/// Returns an [`ExitCode::UNREADABLE`] error if:
/// - The file cannot be opened or read (I/O error)
/// - The file exceeds `source::MAX_SOURCE_SIZE`
/// - The file is not UTF-8
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let file = fs::File::open(file_path).map_err(|e| {
        CliError::new(
            format!("Error: Could not open file {}: {}", file_path.display(), e),
            ExitCode::UNREADABLE,
        )
    })?;

    source::read_source(file).map_err(|e| unreadable(file_path, &e))
}

fn unreadable(file_path: &Path, err: &SourceError) -> CliError {
    let mut message = format!("Error: Could not read file {}: {}", file_path.display(), err);
    if let Some(help) = err.help() {
        message.push_str(&format!("\n  help: {}", help));
    }
    CliError::new(message, ExitCode::UNREADABLE)
}

fn output_error(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {}", e))
}

// ============================================================================
// Lexer mode
// ============================================================================

/// Tokenize a file and print one `<lexeme> <TOKEN_KIND_NAME>` line per token.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    write_listing(&source, stdout.lock()).map_err(output_error)?;
    Ok(ExitCode::SUCCESS)
}

/// Write the token listing for `source` to `out`.
pub fn write_listing<W: Write>(source: &str, mut out: W) -> io::Result<()> {
    for token in lexer::lex(source) {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}

// ============================================================================
// Parser mode
// ============================================================================

/// Validate a file, streaming diagnostics to stderr.
pub fn parse_file(file_path: &Path, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let stdout = io::stdout();
    let verdict = write_validation(&source, config, stdout.lock(), io::stderr()).map_err(output_error)?;
    tracing::info!(file = %file_path.display(), errors = verdict.error_count(), "validation finished");

    match verdict {
        Verdict::Validated => Ok(ExitCode::SUCCESS),
        Verdict::Failed { .. } => Err(CliError::failure(verdict.to_string())),
    }
}

/// Run one validation session over `source`.
///
/// The banner and the `Syntax Validated` line go to `out`; each syntax error goes to `diagnostics` as soon
/// as it is found.
pub fn write_validation<W: Write, D: Write>(
    source: &str,
    config: ParserConfig,
    mut out: W,
    diagnostics: D,
) -> io::Result<Verdict> {
    writeln!(out, "{}", PARSER_BANNER)?;
    out.flush()?;

    let mut sink = WriterSink::new(diagnostics);
    let verdict = parser::validate(source, config, &mut sink);
    sink.into_inner().flush()?;

    if verdict.is_validated() {
        writeln!(out, "{}", verdict)?;
    }
    out.flush()?;
    Ok(verdict)
}
