//! Operator vocabulary.
//!
//! This module defines the canonical operator set: assignment, arithmetic, comparison and logical
//! operators, together with the diagnostic name each one is reported under.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches the whole lexeme. `<=` is never read as
//!   `<` followed by `=`.
//! - The grammar only consumes a subset of these (`=`, `+`, `-` and the comparisons). The rest are still
//!   classified so the lexer can report them by name.
//!
//! ## Examples
//! ```rust
//! use cooke_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LessEqual));
//! assert_eq!(operators::token_name(OperatorId::LessEqual), "LEQUAL_OP");
//! assert!(operators::is_comparison(OperatorId::LessEqual));
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Assignment,
    Arithmetic,
    Comparison,
    Logical,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Arithmetic
    Add,
    Sub,
    Mult,
    Div,
    Mod,

    // Comparison
    Less,
    Greater,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,

    // Logical
    And,
    Or,
    Not,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    /// Name used in lexer listings and syntax diagnostics.
    pub token_name: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, "=", "ASSIGN_OP", OperatorCategory::Assignment),
    // Arithmetic
    op(OperatorId::Add, "+", "ADD_OP", OperatorCategory::Arithmetic),
    op(OperatorId::Sub, "-", "SUB_OP", OperatorCategory::Arithmetic),
    op(OperatorId::Mult, "*", "MULT_OP", OperatorCategory::Arithmetic),
    op(OperatorId::Div, "/", "DIV_OP", OperatorCategory::Arithmetic),
    op(OperatorId::Mod, "%", "MOD_OP", OperatorCategory::Arithmetic),
    // Comparison
    op(OperatorId::Less, "<", "LESSER_OP", OperatorCategory::Comparison),
    op(OperatorId::Greater, ">", "GREATER_OP", OperatorCategory::Comparison),
    op(OperatorId::Equal, "==", "EQUAL_OP", OperatorCategory::Comparison),
    op(OperatorId::NotEqual, "!=", "NEQUAL_OP", OperatorCategory::Comparison),
    op(OperatorId::LessEqual, "<=", "LEQUAL_OP", OperatorCategory::Comparison),
    op(OperatorId::GreaterEqual, ">=", "GEQUAL_OP", OperatorCategory::Comparison),
    // Logical
    op(OperatorId::And, "&&", "BOOL_AND", OperatorCategory::Logical),
    op(OperatorId::Or, "||", "BOOL_OR", OperatorCategory::Logical),
    op(OperatorId::Not, "!", "BOOL_NOT", OperatorCategory::Logical),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic name for an operator (e.g. `ADD_OP`).
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for the six relational operators accepted by a condition.
pub fn is_comparison(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Comparison
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive** and whole-string.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

/// Resolve a diagnostic name (e.g. `BOOL_OR`) back to its identifier.
pub fn from_token_name(name: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.token_name == name).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, canonical: &'static str, token_name: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
