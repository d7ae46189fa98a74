use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// The choice is made on the current token alone. A trailing `;` is
    /// optional for every kind of statement and is consumed when present.
    ///
    /// # Returns
    /// A parsed [`Statement`] node. On return, the current token is the last
    /// token of the statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>`.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the identifier is missing,
    /// - `=` is missing,
    /// - the expression is malformed.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.clone(), self.current.line);

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>` or a bare `return`.
    ///
    /// A bare `return` is recognized when the next token is `;`, `}` or the
    /// end of input.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        if matches!(self.peek.kind, TokenKind::RBrace | TokenKind::Eof) {
            return Ok(Statement::Return { value: None, line });
        }
        if self.peek.is(TokenKind::Semicolon) {
            self.next_token();
            return Ok(Statement::Return { value: None, line });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value: Some(value),
                               line })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr, line })
    }

    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
