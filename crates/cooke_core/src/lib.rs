//! Canonical language vocabulary for the Cooke front end.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed literal tables that the
//! classifier matches lexemes against, together with the diagnostic names each token kind is reported
//! under.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no lexer/parser types.
//! - Token names (e.g. `ASSIGN_OP`) are part of the tool's output contract and live next to the spellings
//!   they describe, so a kind can never drift out of step with its name.

pub mod lang;
