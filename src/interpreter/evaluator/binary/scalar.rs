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
    /// Evaluates an infix operation on two integers.
    ///
    /// Arithmetic is checked: a result outside the 64-bit signed range is an
    /// error rather than a wrap-around. Division truncates toward zero.
    /// Relational and equality operators are delegated to
    /// `eval_integer_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for `x / 0`.
    /// - `IntegerOverflow` if the result does not fit in an `i64`, including
    ///   `i64::MIN / -1`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let q = Context::eval_integer_op(BinaryOperator::Div, -7, 2, 1).unwrap();
    /// assert_eq!(q.inspect(), "-3");
    ///
    /// let err = Context::eval_integer_op(BinaryOperator::Div, 1, 0, 3);
    /// assert!(matches!(err, Err(RuntimeError::DivisionByZero { line: 3 })));
    /// ```
    pub fn eval_integer_op(op: BinaryOperator,
                           left: i64,
                           right: i64,
                           line: usize)
                           -> EvalResult<Rc<Object>> {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        let value = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left.checked_div(right)
            },
            Less | Greater | Equal | NotEqual => {
                return Ok(Self::eval_integer_comparison(op, left, right));
            },
        };

        value.map(Object::integer)
             .ok_or(RuntimeError::IntegerOverflow { line })
    }
}
