//! Kind predicates the grammar engine checks the current token against.

use cooke_core::lang::keywords::KeywordId;
use cooke_core::lang::operators::{self, OperatorId};
use cooke_core::lang::punctuation::PunctuationId;

use crate::lexer::TokenKind;

impl TokenKind {
    fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for the kinds that can stand as an expression operand.
    pub fn is_operand(&self) -> bool {
        matches!(self, TokenKind::IntLit | TokenKind::Ident)
    }

    /// Return `true` for relational operators (`<`, `>`, `==`, `!=`, `<=`, `>=`).
    pub fn is_comparison(&self) -> bool {
        self.operator_id().is_some_and(operators::is_comparison)
    }
}
