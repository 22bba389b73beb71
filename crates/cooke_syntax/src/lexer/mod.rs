//! Lexer for the Cooke language
//!
//! Cooke source is tokenized by whitespace alone: every maximal run of non-separator characters is one
//! lexeme, and each lexeme is classified on its own. There is no sub-tokenization, so `x=1` is a single
//! (unknown-to-the-grammar) identifier lexeme rather than three tokens.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and the listing-line reader
//!
//! ## Classification order
//!
//! 1. Whole-lexeme match against the operator, punctuation and keyword registries
//! 2. All ASCII digits → [`TokenKind::IntLit`]
//! 3. ASCII letter first → [`TokenKind::Ident`]
//! 4. Anything else (including the empty string) → [`TokenKind::Unknown`]

pub mod tokens;

pub use tokens::{Token, TokenKind, TokenLineError, parse_token_line};

use cooke_core::lang::keywords;
use cooke_core::lang::operators;
use cooke_core::lang::punctuation;

use crate::config::LineTracking;
use crate::span::Span;

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Classify one lexeme. Total and context-free: the same text always yields the same kind.
pub fn classify(lexeme: &str) -> TokenKind {
    if let Some(id) = operators::from_str(lexeme) {
        return TokenKind::Operator(id);
    }
    if let Some(id) = punctuation::from_str(lexeme) {
        return TokenKind::Punctuation(id);
    }
    if let Some(id) = keywords::from_str(lexeme) {
        return TokenKind::Keyword(id);
    }

    if !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return TokenKind::IntLit;
    }

    match lexeme.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => TokenKind::Ident,
        _ => TokenKind::Unknown,
    }
}

/// Lexeme separators: space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

// ============================================================================
// TOKEN STREAM
// ============================================================================

/// Pull-based cursor over a source text.
///
/// Exposes exactly one current token. [`advance`](TokenStream::advance) replaces it with the next lexeme;
/// once the text is exhausted the current token is the empty [`TokenKind::Unknown`] sentinel, and stays
/// that way no matter how many more times the stream is advanced.
pub struct TokenStream<'src> {
    source: &'src str,
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    line_tracking: LineTracking,
    line: usize,
    current: Token<'src>,
    exhausted: bool,
}

impl<'src> TokenStream<'src> {
    /// Create a stream over `source` and pull the first lexeme.
    pub fn new(source: &'src str, line_tracking: LineTracking) -> Self {
        let mut stream = Self {
            source,
            chars: source.char_indices().peekable(),
            line_tracking,
            line: 1,
            current: Token::sentinel(0, 1),
            exhausted: false,
        };
        stream.advance();
        stream
    }

    /// The current token.
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    /// Current line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Return `true` once the source has no more lexemes.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Pull the next lexeme and make it the current token.
    pub fn advance(&mut self) {
        self.skip_separators();

        let Some(&(start, _)) = self.chars.peek() else {
            self.exhausted = true;
            self.current = Token::sentinel(self.source.len(), self.line);
            return;
        };

        let mut end = start;
        while let Some(&(pos, c)) = self.chars.peek() {
            if is_separator(c) {
                break;
            }
            end = pos + c.len_utf8();
            self.chars.next();
        }

        let lexeme = &self.source[start..end];
        let kind = classify(lexeme);
        tracing::trace!(lexeme, kind = kind.name(), line = self.line, "token");
        self.current = Token::new(lexeme, kind, Span::new(start, end), self.line);
    }

    fn skip_separators(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_separator(c) {
                break;
            }
            if c == '\n' && self.line_tracking == LineTracking::Separators {
                self.line += 1;
            }
            self.chars.next();
        }
    }
}

/// Tokenize an entire source text (lexer mode).
///
/// The end-of-stream sentinel is not included.
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut stream = TokenStream::new(source, LineTracking::Separators);
    let mut tokens = Vec::new();
    while !stream.is_exhausted() {
        tokens.push(*stream.current());
        stream.advance();
    }
    tokens
}
