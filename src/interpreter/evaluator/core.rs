use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        object::{Function, Object},
    },
};

/// Result type of the operator helpers.
///
/// Operators either produce a value of type `T` or fail with a
/// `RuntimeError`; they cannot `return`.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why the evaluation of a node stopped before producing a value.
///
/// Both cases travel outward through `?` and skip every enclosing
/// expression, statement and block on the way.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` fired. Caught by the innermost call, or by the program.
    Return(Rc<Object>),
    /// A runtime fault. Caught only by the program, where it becomes an
    /// [`Object::Error`].
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type of statement and expression evaluation.
pub type ExecResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation context.
///
/// Bindings live in [`Env`] handles passed alongside; the context only
/// carries evaluation options and the current call depth. A `Context` can be
/// reused for any number of evaluations.
#[derive(Debug, Default)]
pub struct Context {
    /// Maximum nesting of function calls. `None` leaves recursion unbounded,
    /// so runaway recursion exhausts the native stack.
    pub max_depth: Option<usize>,
    pub(in crate::interpreter::evaluator) depth: usize,
}

impl Context {
    /// Creates a context with unbounded call depth.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None,
               depth:     0, }
    }

    /// Creates a context that reports an error instead of nesting more than
    /// `limit` function calls.
    #[must_use]
    pub const fn with_max_depth(limit: usize) -> Self {
        Self { max_depth: Some(limit),
               depth:     0, }
    }

    /// Returns the number of function calls currently being evaluated.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Evaluates a program and always produces a value.
    ///
    /// Runtime faults are returned as an [`Object::Error`]; a top-level
    /// `return` is unwrapped to the returned value.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, evaluator::core::Context};
    ///
    /// let (program, errors) = monkey::parse("let x = 6; x * 7");
    /// assert!(errors.is_empty());
    ///
    /// let result = Context::new().evaluate(&program, &Environment::new());
    /// assert_eq!(result.inspect(), "42");
    /// ```
    pub fn evaluate(&mut self, program: &Program, env: &Env) -> Rc<Object> {
        trace!("evaluating {} statement(s)", program.statements.len());
        self.depth = 0;
        self.eval_program(program, env)
            .unwrap_or_else(|error| Rc::new(error.into()))
    }

    /// Evaluates the statements of a program in order.
    ///
    /// A `return` that reaches the top level stops evaluation and its value
    /// is the result; otherwise the value of the last statement is. An empty
    /// program yields `null`.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Rc<Object>> {
        let mut result = Object::null();

        for statement in &program.statements {
            result = match self.eval_statement(statement, env) {
                Ok(value) => value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Error(error)) => return Err(error),
            };
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// - `let` binds the value in `env` itself, shadowing outer bindings, and
    ///   yields `null`.
    /// - `return` unwinds with `Unwind::Return` carrying its value (or
    ///   `null`).
    /// - An expression statement yields the expression's value.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The environment of the enclosing scope.
    ///
    /// # Returns
    /// The statement's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> ExecResult<Rc<Object>> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().set(name.name.clone(), value);
                Ok(Object::null())
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Object::null(),
                };
                Err(Unwind::Return(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, identifiers, prefix
    /// and infix operations, conditionals, function literals and calls.
    /// Operands are evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment used to resolve identifiers.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> ExecResult<Rc<Object>> {
        match expr {
            Expr::Identifier(ident) => Ok(Self::eval_identifier(ident, env)?),
            Expr::Integer { value, .. } => Ok(Object::integer(*value)),
            Expr::Boolean { value, .. } => Ok(Object::boolean(*value)),
            Expr::Prefix { op, operand, line } => {
                let operand = self.eval(operand, env)?;
                Ok(Self::eval_unary(*op, &operand, *line)?)
            },
            Expr::Infix { left, op, right, line } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Ok(Self::eval_binary(*op, &left, &right, *line)?)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if_expr(condition, consequence, alternative.as_ref(), env),
            Expr::Function(literal) => {
                Ok(Rc::new(Object::Function(Function { parameters: literal.parameters.clone(),
                                                       body:       literal.body.clone(),
                                                       env:        Rc::clone(env), })))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
        }
    }
}
