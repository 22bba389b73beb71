//! Punctuation vocabulary.
//!
//! Delimiters and the statement terminator.
//!
//! ## Examples
//! ```rust
//! use cooke_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::token_name(PunctuationId::LBrace), "OPEN_CURL");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses and braces.
    Delimiter,
    /// The `;` statement terminator.
    Terminator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub token_name: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", "OPEN_PAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", "CLOSE_PAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", "OPEN_CURL", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", "CLOSE_CURL", PunctuationCategory::Delimiter),
    info(PunctuationId::Semicolon, ";", "SEMICOLON", PunctuationCategory::Terminator),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic name for a punctuation token.
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Resolve a diagnostic name (e.g. `SEMICOLON`) back to its identifier.
pub fn from_token_name(name: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.token_name == name).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    token_name: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
