/// Core evaluation logic and context management.
///
/// Contains the `Context`, the dispatch over statements and expressions, and
/// the conversion of runtime faults into error values at the top level.
pub mod core;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT and integer negation.
pub mod unary;

/// Infix operator evaluation logic.
///
/// Handles integer arithmetic, relational comparisons, and equality between
/// values of any type.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to closures: argument checking, frame creation and return
/// value unwrapping.
pub mod function;

/// Utility functions for evaluation.
///
/// Blocks, conditionals and identifier resolution.
pub mod utils;
