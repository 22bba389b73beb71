//! Syntax validator for the Cooke language
//!
//! A recursive-descent grammar engine that walks a [`TokenStream`] one token at a time and checks it
//! against the Cooke grammar. It builds no tree: the outcome of a session is a [`Verdict`] plus the
//! diagnostics handed to the session's [`DiagnosticSink`].
//!
//! ```text
//! Program    ::= Statement
//! Statement  ::= IDENT '=' Expression ';'
//!              | 'if' '(' Condition ')' Block ('else' Block)?
//!              | ('input' | 'output') '(' IDENT ')' ';'
//! Block      ::= '{' Statement '}'
//! Expression ::= Operand (('+' | '-') Operand)*
//! Operand    ::= INT_LIT | IDENT
//! Condition  ::= Expression ('<' | '>' | '==' | '!=' | '<=' | '>=') Expression
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use cooke_syntax::parser;
//!
//! assert!(parser::parse("if ( a < b ) { x = 1 ; }").is_ok());
//!
//! let errors = parser::parse("x 1 + 2 ;").unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].to_string(), "Error on line 1: Expected ASSIGN_OP but found 1 (INT_LIT)");
//! ```

use std::fmt;

use crate::config::{ParserConfig, ProgramShape};
use crate::diagnostics::{DiagnosticSink, Expected, SyntaxError};
use crate::lexer::{Token, TokenKind, TokenStream};
use cooke_core::lang::keywords::KeywordId;
use cooke_core::lang::operators::OperatorId;
use cooke_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping each
// grammar family in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
