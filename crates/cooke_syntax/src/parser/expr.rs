/// Expression and condition parsing.
///
/// Expressions are a flat, left-associative chain of `+`/`-` over integer literals and identifiers.
/// `*`, `/` and `%` are classified by the lexer but are not part of the grammar.
impl<'src, 'sink> Parser<'src, 'sink> {
    fn expression(&mut self) {
        if self.operand().is_err() {
            return;
        }
        while self.check_op(OperatorId::Add) || self.check_op(OperatorId::Sub) {
            self.advance();
            // A bad right-hand operand is reported and the chain keeps going.
            let _ = self.operand();
        }
    }

    fn operand(&mut self) -> ParseResult {
        if self.peek().kind.is_operand() {
            self.advance();
            Ok(())
        } else {
            Err(self.error(Expected::Operand))
        }
    }

    /// Exactly one comparison; `a < b < c` stops after `b`.
    fn condition(&mut self) {
        self.expression();
        if self.peek().kind.is_comparison() {
            self.advance();
            self.expression();
        } else {
            self.error(Expected::ComparisonOperator);
        }
    }
}
