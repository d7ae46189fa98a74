/// Dispatch of infix operators by operand types.
pub mod core;

/// Checked integer arithmetic.
///
/// Addition, subtraction, multiplication and truncating division on 64-bit
/// integers, reporting overflow and division by zero as runtime errors.
pub mod scalar;

/// Relational and equality comparisons.
pub mod comparison;
