use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by function parameter lists and call argument
    /// lists. The current token is the opening delimiter; each call to
    /// `parse_item` starts with the item's first token still in peek
    /// position. An immediately encountered closing token produces an empty
    /// list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list.
    ///
    /// # Returns
    /// A vector of parsed items. On return, the current token is `closing`.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or the closing token
    /// is missing.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.peek.is(closing) {
            self.next_token();
            return Ok(items);
        }

        items.push(parse_item(self)?);
        while self.peek.is(TokenKind::Comma) {
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses one function parameter, which must be a plain identifier.
    pub(in crate::interpreter::parser) fn parse_parameter(&mut self) -> ParseResult<Identifier> {
        self.expect_peek(TokenKind::Ident)?;
        Ok(Identifier::new(self.current.literal.clone(), self.current.line))
    }

    /// Parses one call argument, a full expression.
    pub(in crate::interpreter::parser) fn parse_argument(&mut self) -> ParseResult<Expr> {
        self.next_token();
        self.parse_expression(Precedence::Lowest)
    }
}
