//! Syntax front end for the Cooke language: lexeme classifier, token stream cursor, and grammar engine.
//!
//! The pipeline is pull-based. [`parser::Parser`] owns a [`lexer::TokenStream`], which pulls one
//! whitespace-delimited lexeme at a time from the source text and classifies it with [`lexer::classify`].
//! Syntax errors are handed to a [`diagnostics::DiagnosticSink`] as soon as they are found.
//!
//! ## Notes
//! - This crate is "validation-only": it builds no syntax tree and does no semantic analysis.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `cooke_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use cooke_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x = 1 + 2 ;");
//! assert_eq!(tokens.len(), 6);
//! assert!(parser::parse("x = 1 + 2 ;").is_ok());
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod span;
pub mod token_helpers;
