//! Diagnostics and error reporting for Cooke.
//!
//! Two families of error live here:
//! - [`SyntaxError`]: a non-fatal grammar mismatch. The grammar engine reports one per mismatch through a
//!   [`DiagnosticSink`] and keeps going.
//! - [`SourceError`]: a fatal failure to obtain the source text. Nothing is tokenized when this occurs.

use std::fmt;
use std::io::Write;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::lexer::TokenKind;
use crate::span::Span;

// ============================================================================
// Syntax errors
// ============================================================================

/// What the grammar engine was looking for when a mismatch occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific token kind, reported by its name (e.g. `SEMICOLON`).
    Kind(TokenKind),
    /// The start of an assignment, conditional, or input/output statement.
    Statement,
    /// An integer literal or identifier operand.
    Operand,
    /// One of `<`, `>`, `==`, `!=`, `<=`, `>=`.
    ComparisonOperator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => f.write_str(kind.name()),
            Expected::Statement => f.write_str("valid statement"),
            Expected::Operand => f.write_str("INT_LIT or IDENT"),
            Expected::ComparisonOperator => f.write_str("comparison operator"),
        }
    }
}

/// A grammar mismatch at the current token.
///
/// The `Display` form is the line the validator prints:
/// `Error on line <N>: Expected <what> but found <lexeme> (<KIND>)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Expected {expected} but found {lexeme} ({kind})")]
pub struct SyntaxError {
    pub line: usize,
    pub span: Span,
    pub expected: Expected,
    /// Raw text of the offending token; empty when the stream was already exhausted.
    pub lexeme: String,
    pub kind: TokenKind,
}

impl SyntaxError {
    /// Return `true` if the mismatch happened on the end-of-stream sentinel.
    pub fn at_end_of_input(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("cooke::syntax::mismatch"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.at_end_of_input() {
            Some(Box::new("the input ended before the statement was complete"))
        } else {
            None
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(format!("expected {}", self.expected)), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Diagnostic sinks
// ============================================================================

/// Destination for syntax errors as the grammar engine produces them.
///
/// The engine calls [`report`](DiagnosticSink::report) exactly once per mismatch, in source order.
pub trait DiagnosticSink {
    fn report(&mut self, error: &SyntaxError);
}

/// Collect every diagnostic for later inspection.
impl DiagnosticSink for Vec<SyntaxError> {
    fn report(&mut self, error: &SyntaxError) {
        self.push(error.clone());
    }
}

/// Stream each diagnostic as one line to a writer (typically stderr).
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, error: &SyntaxError) {
        // Losing the diagnostic text does not change the verdict; the counter lives in the parser.
        if let Err(e) = writeln!(self.out, "{}", error) {
            tracing::warn!("failed to write diagnostic: {}", e);
        }
    }
}

// ============================================================================
// Source errors
// ============================================================================

/// Failure to obtain the source text for a session.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("could not read input: {0}")]
    #[diagnostic(code(cooke::source::io))]
    Io(#[from] std::io::Error),

    #[error("input is too large (more than {max} bytes)")]
    #[diagnostic(code(cooke::source::too_large), help("split the program into smaller files"))]
    TooLarge { max: u64 },

    #[error("input is not valid UTF-8")]
    #[diagnostic(code(cooke::source::encoding), help("save the source file as UTF-8 text"))]
    InvalidUtf8(#[source] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooke_core::lang::operators::OperatorId;
    use cooke_core::lang::punctuation::PunctuationId;

    fn mismatch(expected: Expected, lexeme: &str, kind: TokenKind) -> SyntaxError {
        SyntaxError {
            line: 1,
            span: Span::new(2, 2 + lexeme.len()),
            expected,
            lexeme: lexeme.to_string(),
            kind,
        }
    }

    #[test]
    fn test_display_matches_validator_line() {
        let err = mismatch(Expected::Kind(TokenKind::Operator(OperatorId::Assign)), "1", TokenKind::IntLit);
        assert_eq!(err.to_string(), "Error on line 1: Expected ASSIGN_OP but found 1 (INT_LIT)");
    }

    #[test]
    fn test_display_phrases() {
        assert_eq!(Expected::Statement.to_string(), "valid statement");
        assert_eq!(Expected::Operand.to_string(), "INT_LIT or IDENT");
        assert_eq!(Expected::ComparisonOperator.to_string(), "comparison operator");
    }

    #[test]
    fn test_end_of_input_has_empty_lexeme_and_help() {
        let err = mismatch(
            Expected::Kind(TokenKind::Punctuation(PunctuationId::RParen)),
            "",
            TokenKind::Unknown,
        );
        assert!(err.at_end_of_input());
        assert_eq!(err.to_string(), "Error on line 1: Expected CLOSE_PAREN but found  (UNKNOWN)");
        assert!(err.help().is_some());
    }

    #[test]
    fn test_diagnostic_code_and_label() {
        let err = mismatch(Expected::Operand, ";", TokenKind::Punctuation(PunctuationId::Semicolon));
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("cooke::syntax::mismatch"));
        let labels: Vec<LabeledSpan> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_writer_sink_streams_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report(&mismatch(Expected::Statement, "}", TokenKind::Punctuation(PunctuationId::RBrace)));
        sink.report(&mismatch(Expected::Operand, "*", TokenKind::Operator(OperatorId::Mult)));
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "Error on line 1: Expected valid statement but found } (CLOSE_CURL)\n\
             Error on line 1: Expected INT_LIT or IDENT but found * (MULT_OP)\n"
        );
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<SyntaxError> = Vec::new();
        sink.report(&mismatch(Expected::Statement, "?", TokenKind::Unknown));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].lexeme, "?");
    }
}
