use log::{debug, trace};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::binary::{precedence_of, token_to_binary_operator},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of an operator, from loosest to tightest.
///
/// The climbing loop keeps consuming infix operators while the next one binds
/// tighter than the current floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Floor used at the start of an expression and inside `(...)`.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// `f(x)`
    Call,
}

/// A recursive-descent parser with precedence climbing for expressions.
///
/// The parser looks at two tokens at a time: `current`, the token being
/// parsed, and `peek`, the one after it. Syntax errors never abort the parse;
/// they are collected and the parser resumes at the next token, so a single
/// pass can report several problems.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2; x"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + 2); x");
/// ```
pub struct Parser<'source> {
    lexer:                                      Lexer<'source>,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek:    Token,
    errors:                                     Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Creates a parser reading from `lexer`, with the token window filled.
    #[must_use]
    pub fn new(mut lexer: Lexer<'source>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses the whole input into a [`Program`].
    ///
    /// Statements that fail to parse are left out of the program and their
    /// errors are recorded; see [`errors`](Self::errors). A program returned
    /// alongside errors may be missing statements.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current.is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.recover(error),
            }
            self.next_token();
        }

        trace!("parsed {} statement(s), {} error(s)",
               program.statements.len(),
               self.errors.len());
        program
    }

    /// Returns the syntax errors collected so far, in detection order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns the collected syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token must be the first token of the expression. On
    /// return, the current token is the last token of the expression.
    ///
    /// # Parameters
    /// - `precedence`: The floor; infix operators at or below it end the
    ///   expression.
    ///
    /// # Returns
    /// The parsed expression.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek.is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = match self.current.kind {
                TokenKind::LParen => self.parse_call(left)?,
                kind => match token_to_binary_operator(kind) {
                    Some(op) => self.parse_infix(left, op)?,
                    None => return Ok(left),
                },
            };
        }

        Ok(left)
    }

    /// Records an error and moves past a `;` that directly follows the point
    /// of failure, so the rest of the broken statement is not reported again.
    pub(in crate::interpreter::parser) fn recover(&mut self, error: ParseError) {
        debug!("syntax error: {error}");
        self.errors.push(error);
        self.skip_semicolon();
    }

    /// Shifts the token window by one.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token has the given kind.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedToken` and leaves the window untouched if
    /// the peek token is of another kind.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self,
                                                      kind: TokenKind)
                                                      -> ParseResult<()> {
        if self.peek.is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::ExpectedToken { expected: kind,
                                            found:    self.peek.kind,
                                            line:     self.peek.line, })
        }
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }
}
