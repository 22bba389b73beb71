/// Token-stream helpers and error reporting.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Checking / expecting keywords, operators, punctuation and identifiers
/// - Reporting a mismatch (`error`)
impl<'src, 'sink> Parser<'src, 'sink> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token<'src> {
        self.tokens.current()
    }

    /// Move to the next token. At end of input the sentinel stays current.
    fn advance(&mut self) {
        self.tokens.advance();
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn expect_punct(&mut self, id: PunctuationId) -> ParseResult {
        if self.check_punct(id) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(Expected::Kind(TokenKind::Punctuation(id))))
        }
    }

    fn expect_op(&mut self, id: OperatorId) -> ParseResult {
        if self.check_op(id) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(Expected::Kind(TokenKind::Operator(id))))
        }
    }

    fn expect_ident(&mut self) -> ParseResult {
        if self.peek().kind == TokenKind::Ident {
            self.advance();
            Ok(())
        } else {
            Err(self.error(Expected::Kind(TokenKind::Ident)))
        }
    }

    /// Report a mismatch at the current token, count it, and skip the token.
    fn error(&mut self, expected: Expected) -> Recovered {
        let token = *self.peek();
        let error = SyntaxError {
            line: token.line,
            span: token.span,
            expected,
            lexeme: token.lexeme.to_string(),
            kind: token.kind,
        };
        tracing::debug!(%error, "syntax error");

        self.error_count += 1;
        self.sink.report(&error);
        self.advance();
        Recovered
    }
}
