//! Cooke language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, and
//! punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! diagnostic names via registry tables instead of matching strings at call sites.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - Every lookup is whole-string and case-sensitive. Lexemes are already whitespace-delimited, so no
//!   prefix matching is ever needed.
//!
//! ## Examples
//! ```rust
//! use cooke_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::token_name(KeywordId::If), "KEY_IF");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
