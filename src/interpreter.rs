/// The environment module implements lexical scoping.
///
/// An environment is a binding table with a link to its enclosing scope.
/// Function values capture the environment they are defined in, and every
/// call runs in a fresh environment enclosed by the captured one.
///
/// # Responsibilities
/// - Resolves names through the chain of enclosing scopes.
/// - Binds names in the innermost scope only, shadowing outer bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates statements and expressions,
/// threads environments for identifier resolution, and produces a runtime
/// object. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind, performing all supported operations.
/// - Handles bindings, closures, calls and early returns.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to an identifier, integer literal, operator, delimiter or
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, text and line.
/// - Marks unrecognized characters as illegal tokens instead of failing.
pub mod lexer;
/// The object module defines the runtime values.
///
/// This module declares the `Object` enum: integers, booleans, null,
/// functions, and the internal return and error signals, together with their
/// type tags and display rendering.
///
/// # Responsibilities
/// - Defines all runtime value variants.
/// - Owns the shared `true`, `false` and `null` instances.
/// - Implements truthiness and `inspect` rendering.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the lexer's tokens and constructs the program tree
/// using recursive descent for statements and precedence climbing for
/// expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Collects syntax errors with line information and keeps going.
pub mod parser;
