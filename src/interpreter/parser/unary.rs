use crate::{
    ast::{Expr, FunctionLiteral, Identifier, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the expression that starts at the current token.
    ///
    /// Every token that can begin an expression has a prefix rule:
    /// - identifiers, integer and boolean literals,
    /// - `-` and `!` prefix operators,
    /// - `(` grouping,
    /// - `if` expressions,
    /// - `fn` literals.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     prefix := IDENT | INT | "true" | "false"
    ///             | ("-" | "!") expression
    ///             | "(" expression ")"
    ///             | if_expression
    ///             | function_literal
    /// ```
    ///
    /// # Errors
    /// - `IllegalToken` for characters the lexer did not recognize.
    /// - `NoPrefixRule` for tokens that cannot start an expression.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        match self.current.kind {
            TokenKind::Ident => {
                Ok(Expr::Identifier(Identifier::new(self.current.literal.clone(), line)))
            },
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True => Ok(Expr::Boolean { value: true,
                                                  line }),
            TokenKind::False => Ok(Expr::Boolean { value: false,
                                                   line }),
            TokenKind::Minus => self.parse_prefix_expression(UnaryOperator::Negate),
            TokenKind::Bang => self.parse_prefix_expression(UnaryOperator::Not),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Illegal => {
                Err(ParseError::IllegalToken { literal: self.current.literal.clone(),
                                               line })
            },
            kind => Err(ParseError::NoPrefixRule { token: kind, line }),
        }
    }

    /// Parses an integer literal.
    ///
    /// # Errors
    /// Returns `ParseError::LiteralTooLarge` if the digits do not fit in an
    /// `i64`.
    fn parse_integer_literal(&self) -> ParseResult<Expr> {
        let line = self.current.line;
        let literal = &self.current.literal;

        literal.parse::<i64>()
               .map(|value| Expr::Integer { value, line })
               .map_err(|_| ParseError::LiteralTooLarge { literal: literal.clone(),
                                                          line })
    }

    /// Parses `-<operand>` or `!<operand>`.
    ///
    /// The operand is parsed with prefix precedence, so `-a * b` groups as
    /// `(-a) * b` while `!-x` nests as `!(-x)`.
    fn parse_prefix_expression(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        let line = self.current.line;
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          operand: Box::new(operand),
                          line })
    }

    /// Parses `( <expression> )`, resetting the precedence floor inside.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <consequence> }
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    ///
    /// # Errors
    /// - `ExpectedToken` if a parenthesis or brace is missing.
    /// - Propagates any errors from sub-expression parsing.
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek.is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses `fn(<parameters>) { <body> }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(Self::parse_parameter, TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::Function(FunctionLiteral { parameters,
                                            body,
                                            line }))
    }
}
