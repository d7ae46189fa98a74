use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, object::Object},
};

impl Context {
    /// Evaluates a comparison between two integers.
    ///
    /// Integers compare by value. Non-comparison operators yield `false`;
    /// callers only pass `<`, `>`, `==` and `!=`.
    #[must_use]
    pub fn eval_integer_comparison(op: BinaryOperator, left: i64, right: i64) -> Rc<Object> {
        Object::boolean(match op {
                            BinaryOperator::Less => left < right,
                            BinaryOperator::Greater => left > right,
                            BinaryOperator::Equal => left == right,
                            BinaryOperator::NotEqual => left != right,
                            _ => false,
                        })
    }

    /// Tests two non-integer values for equality.
    ///
    /// `true`, `false` and `null` are shared instances, so comparing handles
    /// is exact for them. Functions are equal only to themselves, and values
    /// of different types are never equal.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{evaluator::core::Context, object::Object};
    ///
    /// assert!(Context::is_same_object(&Object::boolean(true), &Object::boolean(true)));
    /// assert!(!Context::is_same_object(&Object::null(), &Object::boolean(false)));
    /// ```
    #[must_use]
    pub fn is_same_object(left: &Rc<Object>, right: &Rc<Object>) -> bool {
        Rc::ptr_eq(left, right)
    }
}
