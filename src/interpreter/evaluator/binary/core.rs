use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        object::Object,
    },
};

impl Context {
    /// Evaluates an infix operation between two values.
    ///
    /// Two integers go to `eval_integer_op`. For any other operand pair only
    /// `==` and `!=` are defined, and they compare identity (see
    /// `is_same_object`); every other operator is an error that names the
    /// operand types.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult` containing the evaluated result.
    ///
    /// # Errors
    /// - `TypeMismatch` when the operand types differ.
    /// - `UnknownInfixOperator` when the operator is not defined for the
    ///   (common) operand type.
    /// - Errors from integer arithmetic.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, object::Object},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Object::integer(3), &Object::integer(4), 1);
    /// assert_eq!(sum.unwrap().inspect(), "7");
    ///
    /// let mismatch = Context::eval_binary(BinaryOperator::Add,
    ///                                     &Object::integer(5),
    ///                                     &Object::boolean(true),
    ///                                     1);
    /// assert!(matches!(mismatch, Err(RuntimeError::TypeMismatch { .. })));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Rc<Object>,
                       right: &Rc<Object>,
                       line: usize)
                       -> EvalResult<Rc<Object>> {
        use BinaryOperator::{Equal, NotEqual};

        match (&**left, &**right) {
            (Object::Integer(a), Object::Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            _ => match op {
                Equal => Ok(Object::boolean(Self::is_same_object(left, right))),
                NotEqual => Ok(Object::boolean(!Self::is_same_object(left, right))),
                _ if left.object_type() != right.object_type() => {
                    Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                     operator: op,
                                                     right: right.object_type(),
                                                     line })
                },
                _ => Err(RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                              operator: op,
                                                              right: right.object_type(),
                                                              line }),
            },
        }
    }
}
