use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until
    /// the closing `}`. Statements inside the block that fail to parse are
    /// recorded as errors and left out, the same way top-level statements
    /// are, so the enclosing construct still gets a (partial) block.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Returns
    /// The block. On return, the current token is the closing `}`.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedToken` if the input ends before the
    /// closing brace.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> ParseResult<BlockStatement> {
        let line = self.current.line;
        let mut statements = Vec::new();

        self.next_token();

        while !self.current.is(TokenKind::RBrace) {
            if self.current.is(TokenKind::Eof) {
                return Err(ParseError::ExpectedToken { expected: TokenKind::RBrace,
                                                       found:    TokenKind::Eof,
                                                       line:     self.current.line, });
            }
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.recover(error),
            }
            self.next_token();
        }

        Ok(BlockStatement { statements, line })
    }
}
