//! Define the reserved keyword vocabulary for the Cooke language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus
//! a const metadata table ([`KEYWORDS`]) that records canonical spellings, diagnostic names and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier, `if` is a keyword.
//! - A keyword spelling always wins over the identifier rule, since literal matching runs first.
//!
//! ## Examples
//! ```rust
//! use cooke_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("output"), Some(KeywordId::Output));
//! assert_eq!(keywords::from_str("Output"), None);
//! assert_eq!(keywords::as_str(KeywordId::Output), "output");
//! ```

/// Category of keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `if` / `else`.
    ControlFlow,
    /// `input` / `output`.
    Io,
}

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Input,
    Output,
    If,
    Else,
}

/// Metadata describing a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub token_name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Input, "input", "KEY_IN", KeywordCategory::Io),
    info(KeywordId::Output, "output", "KEY_OUT", KeywordCategory::Io),
    info(KeywordId::If, "if", "KEY_IF", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", "KEY_ELSE", KeywordCategory::ControlFlow),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Diagnostic name (e.g. `KEY_IN`).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Lookup by diagnostic name.
pub fn from_token_name(name: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.token_name == name).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, token_name: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
