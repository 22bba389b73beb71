/// Statement parsing.
///
/// This chunk implements the `Program`, `Statement` and `Block` rules.
impl<'src, 'sink> Parser<'src, 'sink> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self) {
        match self.config.program_shape {
            ProgramShape::SingleStatement => self.statement(),
            ProgramShape::StatementList => {
                // Every statement consumes at least one token, so this terminates.
                while !self.tokens.is_exhausted() {
                    self.statement();
                }
            }
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) {
        // A failed statement has already been reported; the enclosing rule carries on regardless.
        let _ = self.try_statement();
    }

    fn try_statement(&mut self) -> ParseResult {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Ident => self.assignment(),
            TokenKind::Keyword(KeywordId::If) => self.conditional(),
            TokenKind::Keyword(KeywordId::Input | KeywordId::Output) => self.io_statement(),
            _ => Err(self.error(Expected::Statement)),
        }
    }

    /// `IDENT '=' Expression ';'`
    fn assignment(&mut self) -> ParseResult {
        self.advance();
        self.expect_op(OperatorId::Assign)?;
        self.expression();
        self.expect_punct(PunctuationId::Semicolon)
    }

    /// `'if' '(' Condition ')' Block ('else' Block)?`
    fn conditional(&mut self) -> ParseResult {
        self.advance();
        self.expect_punct(PunctuationId::LParen)?;
        self.condition();
        self.expect_punct(PunctuationId::RParen)?;
        self.block()?;

        if self.check_keyword(KeywordId::Else) {
            self.advance();
            self.block()?;
        }
        Ok(())
    }

    /// `('input' | 'output') '(' IDENT ')' ';'`
    fn io_statement(&mut self) -> ParseResult {
        self.advance();
        self.expect_punct(PunctuationId::LParen)?;
        self.expect_ident()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.expect_punct(PunctuationId::Semicolon)
    }

    /// `'{' Statement '}'`
    fn block(&mut self) -> ParseResult {
        self.expect_punct(PunctuationId::LBrace)?;
        self.statement();
        self.expect_punct(PunctuationId::RBrace)
    }
}
