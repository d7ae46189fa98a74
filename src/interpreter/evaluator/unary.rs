use std::rc::Rc;

use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        object::Object,
    },
};

impl Context {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: logical negation of the operand's truthiness; defined for
    ///   every value.
    /// - `Negate`: integer negation; defined for integers only.
    ///
    /// # Parameters
    /// - `op`: Prefix operator.
    /// - `operand`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `UnknownPrefixOperator` when negating a non-integer.
    /// - `IntegerOverflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, object::Object},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Object::integer(5), 1).unwrap();
    /// assert_eq!(v.inspect(), "-5");
    ///
    /// // Not: 0 is truthy
    /// let v = Context::eval_unary(UnaryOperator::Not, &Object::integer(0), 1).unwrap();
    /// assert_eq!(v.inspect(), "false");
    ///
    /// // Negating a boolean is an error
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Object::boolean(true), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator,
                      operand: &Rc<Object>,
                      line: usize)
                      -> EvalResult<Rc<Object>> {
        match op {
            UnaryOperator::Not => Ok(Object::boolean(!operand.is_truthy())),
            UnaryOperator::Negate => match &**operand {
                Object::Integer(n) => n.checked_neg()
                                       .map(Object::integer)
                                       .ok_or(RuntimeError::IntegerOverflow { line }),
                other => Err(RuntimeError::UnknownPrefixOperator { operator: op,
                                                                   operand:  other.object_type(),
                                                                   line }),
            },
        }
    }
}
