use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::object::ObjectType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// The type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: BinaryOperator,
        /// The type of the right operand.
        right:    ObjectType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A prefix operator is not defined for the operand's type.
    UnknownPrefixOperator {
        /// The operator.
        operator: UnaryOperator,
        /// The type of the operand.
        operand:  ObjectType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An infix operator is not defined for the operands' (matching) type.
    UnknownInfixOperator {
        /// The type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: BinaryOperator,
        /// The type of the right operand.
        right:    ObjectType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to use a name that is not bound in any enclosing scope.
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotAFunction {
        /// The type of the called value.
        found: ObjectType,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64-bit signed range.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::IdentifierNotFound { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::IntegerOverflow { line }
            | Self::CallDepthExceeded { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right,
                                 line, } => {
                write!(f, "line {line}: type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator,
                                          operand,
                                          line, } => {
                write!(f, "line {line}: unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right,
                                         line, } => {
                write!(f, "line {line}: unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name, line } => {
                write!(f, "line {line}: identifier not found: {name}")
            },
            Self::NotAFunction { found, line } => write!(f, "line {line}: not a function: {found}"),
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "line {line}: wrong number of arguments: expected {expected}, got {found}"),
            Self::DivisionByZero { line } => write!(f, "line {line}: division by zero"),
            Self::IntegerOverflow { line } => write!(f, "line {line}: integer overflow"),
            Self::CallDepthExceeded { limit, line } => {
                write!(f, "line {line}: maximum call depth of {limit} exceeded")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
