/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a
/// syntax tree: unexpected tokens, missing delimiters, unusable prefix
/// positions, and integer literals that do not fit the value range.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. A runtime
/// error is surfaced to the caller as an `Object::Error` value; it never
/// aborts the host.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
