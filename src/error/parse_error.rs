use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser collects these instead of stopping at the first one; the
/// `Display` text of each is the diagnostic shown to the user.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    ExpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with this token.
    NoPrefixRule {
        /// The token found in prefix position.
        token: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer produced a character the language does not know.
    IllegalToken {
        /// The offending source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An integer literal was too large to be represented as a 64-bit signed
    /// integer.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. }
            | Self::NoPrefixRule { line, .. }
            | Self::IllegalToken { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected, found, line } => write!(f,
                                                                    "Error on line {line}: expected next token to be {expected}, got {found} instead."),
            Self::NoPrefixRule { token, line } => {
                write!(f, "Error on line {line}: no prefix parse function for {token} found.")
            },
            Self::IllegalToken { literal, line } => {
                write!(f, "Error on line {line}: illegal character '{literal}'.")
            },
            Self::LiteralTooLarge { literal, line } => write!(f,
                                                              "Error on line {line}: could not parse {literal} as integer, literal is too large."),
        }
    }
}

impl std::error::Error for ParseError {}
