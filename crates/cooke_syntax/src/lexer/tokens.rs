//! Token types for the Cooke lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and `;`
//!
//! ## Notes
//! - Every kind knows its own diagnostic name via [`TokenKind::name`]; there is no separate name table
//!   indexed by position.
//! - A [`Token`] borrows its lexeme from the source text.

use std::fmt;

use cooke_core::lang::keywords::{self, KeywordId};
use cooke_core::lang::operators::{self, OperatorId};
use cooke_core::lang::punctuation::{self, PunctuationId};
use thiserror::Error;

use crate::span::Span;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    IntLit,

    // ========== Special ==========
    /// Anything unclassifiable, and the end-of-stream sentinel.
    Unknown,
}

impl TokenKind {
    /// Diagnostic name of this kind, e.g. `ASSIGN_OP`, `IDENT`, `UNKNOWN`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(id),
            TokenKind::Operator(id) => operators::token_name(id),
            TokenKind::Punctuation(id) => punctuation::token_name(id),
            TokenKind::Ident => "IDENT",
            TokenKind::IntLit => "INT_LIT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Resolve a diagnostic name back to its kind.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        match name {
            "IDENT" => Some(TokenKind::Ident),
            "INT_LIT" => Some(TokenKind::IntLit),
            "UNKNOWN" => Some(TokenKind::Unknown),
            _ => operators::from_token_name(name)
                .map(TokenKind::Operator)
                .or_else(|| punctuation::from_token_name(name).map(TokenKind::Punctuation))
                .or_else(|| keywords::from_token_name(name).map(TokenKind::Keyword)),
        }
    }

    /// Every kind, in registry order followed by identifier, integer literal and unknown.
    pub fn all() -> impl Iterator<Item = TokenKind> {
        operators::OPERATORS
            .iter()
            .map(|o| TokenKind::Operator(o.id))
            .chain(punctuation::PUNCTUATION.iter().map(|p| TokenKind::Punctuation(p.id)))
            .chain(keywords::KEYWORDS.iter().map(|k| TokenKind::Keyword(k.id)))
            .chain([TokenKind::Ident, TokenKind::IntLit, TokenKind::Unknown])
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub lexeme: &'src str,
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line the lexeme starts on.
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Construct a new token.
    pub fn new(lexeme: &'src str, kind: TokenKind, span: Span, line: usize) -> Self {
        Self {
            lexeme,
            kind,
            span,
            line,
        }
    }

    /// The end-of-stream token: empty lexeme, [`TokenKind::Unknown`].
    pub fn sentinel(pos: usize, line: usize) -> Self {
        Self::new("", TokenKind::Unknown, Span::point(pos), line)
    }
}

/// Lexer listing form: `<lexeme> <TOKEN_KIND_NAME>`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lexeme, self.kind)
    }
}

// ============================================================================
// LISTING LINES
// ============================================================================

/// Failure to read back a lexer listing line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenLineError {
    #[error("malformed token line {0:?}: expected `<lexeme> <TOKEN_KIND_NAME>`")]
    Malformed(String),

    #[error("unknown token kind name {0:?}")]
    UnknownKind(String),
}

/// Parse one lexer listing line back into its `(lexeme, kind)` pair.
///
/// ## Errors
/// - [`TokenLineError::Malformed`] if the line is not a single lexeme followed by one name.
/// - [`TokenLineError::UnknownKind`] if the name is not a token kind.
pub fn parse_token_line(line: &str) -> Result<(&str, TokenKind), TokenLineError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some((lexeme, name)) = line.split_once(' ') else {
        return Err(TokenLineError::Malformed(line.to_string()));
    };
    // Lexemes never contain separators, so a second space means this is not a listing line.
    if lexeme.is_empty() || name.contains(' ') {
        return Err(TokenLineError::Malformed(line.to_string()));
    }
    let kind = TokenKind::from_name(name).ok_or_else(|| TokenLineError::UnknownKind(name.to_string()))?;
    Ok((lexeme, kind))
}
