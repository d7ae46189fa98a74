use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Looks up the binding power of a token in infix position.
///
/// Tokens that cannot continue an expression have `Precedence::Lowest`, which
/// stops the climbing loop.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     lexer::TokenKind,
///     parser::{Precedence, binary::precedence_of},
/// };
///
/// assert!(precedence_of(TokenKind::Asterisk) > precedence_of(TokenKind::Plus));
/// assert_eq!(precedence_of(TokenKind::LParen), Precedence::Call);
/// assert_eq!(precedence_of(TokenKind::Semicolon), Precedence::Lowest);
/// ```
#[must_use]
pub const fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents an infix operator
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use monkey::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses the right-hand side of a binary operator.
    ///
    /// The current token is the operator. The right operand is parsed with
    /// the operator's own precedence as the floor, which makes chains of the
    /// same operator left-associative: `a - b - c` is `(a - b) - c`.
    ///
    /// # Parameters
    /// - `left`: The already parsed left operand.
    /// - `op`: The operator at the current token.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expr,
                                                      op: BinaryOperator)
                                                      -> ParseResult<Expr> {
        let line = self.current.line;
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line })
    }

    /// Parses a call whose `(` is the current token; `callee` is the
    /// expression parsed before it.
    pub(in crate::interpreter::parser) fn parse_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let line = self.current.line;
        let arguments = self.parse_comma_separated(Self::parse_argument, TokenKind::RParen)?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line })
    }
}
