/// Parser state and the precedence-climbing expression loop.
///
/// Holds the current/peek token window, the collected diagnostics and the
/// entry points `parse_program` and `parse_expression`.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token to `let`, `return` or expression
/// statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and function
/// bodies.
pub mod block;

/// Prefix parse rules.
///
/// Literals, identifiers, prefix operators, grouping, `if` expressions and
/// function literals.
pub mod unary;

/// Infix parse rules and the precedence table.
///
/// Binary operators and call expressions.
pub mod binary;

/// Utility functions for the parser.
///
/// Comma-separated lists shared by parameter and argument parsing.
pub mod utils;

pub use self::core::{ParseResult, Parser, Precedence};
