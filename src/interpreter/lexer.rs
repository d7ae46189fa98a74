use std::fmt;

use logos::Logos;

/// The lexical category of a [`Token`].
///
/// The set is closed: every character of the input either belongs to one of
/// these categories, is skipped as whitespace, or produces an `Illegal` token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Any character the language does not recognize.
    Illegal,
    /// End of input. Produced by [`Lexer::next_token`] once the source is
    /// exhausted, and on every call after that.
    Eof,
    /// Identifier tokens; variable or function names such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`. Signs are prefix operators.
    #[regex(r"[0-9]+")]
    Int,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Newlines are whitespace, but they advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl TokenKind {
    /// Returns the name of the category as shown in diagnostics.
    ///
    /// Operators and delimiters are named by their symbol, everything else by
    /// an upper-case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::NewLine => "NEWLINE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token: its category, the exact source text it was scanned from,
/// and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The source text of the token. Empty for `Eof`.
    pub literal: String,
    /// The 1-based source line, used for diagnostics.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into [`Token`]s, one token per call.
///
/// The lexer never backtracks. Once the input is exhausted,
/// [`next_token`](Self::next_token) keeps returning `Eof`. As an
/// [`Iterator`] it yields the `Eof` token exactly once and then stops, so a
/// collected token stream always ends with the end marker.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("let x = 5;").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Ident,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, TokenKind>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    /// Scans and returns the next token.
    ///
    /// Unrecognized characters come back as `Illegal` tokens carrying the
    /// offending character; scanning continues after them.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.inner.extras.line),
            Some(Err(())) => {
                Token::new(TokenKind::Illegal, self.inner.slice(), self.inner.extras.line)
            },
            None => Token::new(TokenKind::Eof, "", self.inner.extras.line),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
