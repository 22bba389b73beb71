#![forbid(unsafe_code)]
//! Cooke front end
//!
//! A lexical analyzer and recursive-descent syntax validator for Cooke, a minimal imperative teaching
//! language with assignments, `if`/`else`, `input`/`output`, and `+`/`-` expressions.
//! This crate provides the command-line tool; the front end itself lives in `cooke_syntax`, and the token
//! vocabulary in `cooke_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups by id `expect` an entry; a missing entry is a programming error.

pub mod cli;

pub use cooke_syntax::config;
pub use cooke_syntax::diagnostics;
pub use cooke_syntax::lexer;
pub use cooke_syntax::parser;
pub use cooke_syntax::source;

pub use cooke_syntax::config::{LineTracking, ParserConfig, ProgramShape};
pub use cooke_syntax::parser::Verdict;
