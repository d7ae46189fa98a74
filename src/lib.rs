//! # monkey
//!
//! monkey is an interpreter for a small, dynamically typed scripting
//! language written in Rust. Source text is tokenized, parsed into a syntax
//! tree with a precedence-climbing parser, and evaluated directly by walking
//! the tree. The language has integers, booleans, `null`, `let` bindings,
//! `if` expressions, first-class functions with closures, and early
//! `return`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use log::{trace, warn};

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        environment::Env,
        evaluator::core::Context,
        lexer::Lexer,
        object::Object,
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Renders any tree back to canonical source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are collected into a list of diagnostics;
/// runtime errors become the error value an evaluation returns.
///
/// # Responsibilities
/// - Defines error enums for both failure channels.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, runtime values and
/// environments to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, objects and
///   environments.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns a lexer over `source` as a consuming token stream.
///
/// The stream is finite and ends with an `Eof` token. It cannot be restarted;
/// call `tokenize` again for a fresh one.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::TokenKind;
///
/// let tokens: Vec<_> = monkey::tokenize("a == !b").collect();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].kind, TokenKind::Eq);
/// assert_eq!(tokens[4].kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses `source` into a program and a list of diagnostics.
///
/// Diagnostics are human-readable sentences, one per syntax problem, in the
/// order they were found. An empty list means the program is well formed;
/// otherwise the program may be missing statements and should not be
/// evaluated.
///
/// # Example
/// ```
/// let (program, errors) = monkey::parse("-a * b");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// let (_, errors) = monkey::parse("let = 5;");
/// assert!(!errors.is_empty());
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let diagnostics = parser.errors().iter().map(ToString::to_string).collect();
    (program, diagnostics)
}

/// Parses `source`, accepting it only if it is free of syntax errors.
///
/// # Errors
/// Returns every syntax error found, in detection order.
///
/// # Example
/// ```
/// let program = monkey::try_parse("let x = 1; x").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let errors = monkey::try_parse("let x 1; )").unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn try_parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    if !errors.is_empty() {
        warn!("rejected input with {} syntax error(s)", errors.len());
        return Err(errors);
    }

    Ok(program)
}

/// Evaluates a program in `env` and returns its value.
///
/// Bindings made by top-level `let` statements are written into `env`, so
/// passing the same environment to several calls carries them over. Runtime
/// faults are returned as an error value; check
/// [`Object::is_error`] before presenting the result.
///
/// # Example
/// ```
/// use monkey::interpreter::environment::Environment;
///
/// let env = Environment::new();
/// let (program, _) = monkey::parse("let add = fn(a, b) { a + b };");
/// monkey::evaluate(&program, &env);
///
/// let (program, _) = monkey::parse("add(2, 3)");
/// assert_eq!(monkey::evaluate(&program, &env).inspect(), "5");
///
/// let (program, _) = monkey::parse("5 + true");
/// assert!(monkey::evaluate(&program, &env).is_error());
/// ```
#[must_use]
pub fn evaluate(program: &Program, env: &Env) -> Rc<Object> {
    Context::new().evaluate(program, env)
}

/// Returns the final evaluation result of a source text.
///
/// This function parses `source` and, if it is well formed, evaluates it with
/// `context` in `env`.
///
/// # Errors
/// Returns the syntax errors if parsing found any; nothing is evaluated in
/// that case. Runtime errors are not an `Err`: they come back as an error
/// value.
///
/// # Examples
/// ```
/// use monkey::{
///     get_result,
///     interpreter::{environment::Environment, evaluator::core::Context},
/// };
///
/// let env = Environment::new();
/// let mut context = Context::new();
///
/// let result = get_result("let x = 2 + 2; x", &mut context, &env).unwrap();
/// assert_eq!(result.inspect(), "4");
///
/// // An unbound name is a runtime error value, not a syntax error.
/// let result = get_result("y + 1", &mut context, &env).unwrap();
/// assert!(result.is_error());
///
/// // A missing parenthesis is a syntax error.
/// assert!(get_result("(1 + 2", &mut context, &env).is_err());
/// ```
pub fn get_result(source: &str,
                  context: &mut Context,
                  env: &Env)
                  -> Result<Rc<Object>, Vec<ParseError>> {
    trace!("running {} byte(s) of source", source.len());

    let program = try_parse(source)?;
    Ok(context.evaluate(&program, env))
}
