use std::rc::Rc;

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{Context, EvalResult, ExecResult, Unwind},
        object::Object,
    },
};

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then each argument from left to right,
    /// all in the caller's environment.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `env`: The caller's environment.
    ///
    /// # Returns
    /// The function's result.
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize,
                     env: &Env)
                     -> ExecResult<Rc<Object>> {
        let function = self.eval(callee, env)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.eval(argument, env))
                                 .collect::<ExecResult<Vec<_>>>()?;

        Ok(self.apply_function(&function, arguments, line)?)
    }

    /// Calls a function value with already evaluated arguments.
    ///
    /// A fresh environment enclosed by the function's captured environment is
    /// created for the call, and parameters are bound in it positionally. The
    /// body runs in that environment; a `return` inside it, however deeply
    /// nested, ends the call here.
    /// The frame outlives the call only if a closure created during the call
    /// captured it.
    ///
    /// # Errors
    /// - `NotAFunction` if `function` is not a function value.
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters.
    /// - `CallDepthExceeded` if a call depth limit is set and reached.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     environment::Environment,
    ///     evaluator::core::Context,
    ///     object::Object,
    /// };
    ///
    /// let env = Environment::new();
    /// let (program, _) = monkey::parse("fn(a, b) { a - b }");
    /// let mut context = Context::new();
    /// let function = context.eval_program(&program, &env).unwrap();
    ///
    /// let result = context.apply_function(&function,
    ///                                     vec![Object::integer(10), Object::integer(4)],
    ///                                     1)
    ///                     .unwrap();
    /// assert_eq!(result.inspect(), "6");
    /// ```
    pub fn apply_function(&mut self,
                          function: &Rc<Object>,
                          arguments: Vec<Rc<Object>>,
                          line: usize)
                          -> EvalResult<Rc<Object>> {
        let Object::Function(function) = &**function else {
            return Err(RuntimeError::NotAFunction { found: function.object_type(),
                                                    line });
        };

        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: function.parameters.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        if let Some(limit) = self.max_depth
           && self.depth >= limit
        {
            return Err(RuntimeError::CallDepthExceeded { limit, line });
        }

        let frame = Environment::new_enclosed(&function.env);
        {
            let mut frame = frame.borrow_mut();
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                frame.set(parameter.name.clone(), argument);
            }
        }
        debug!("call on line {line} with {} argument(s) at depth {}",
               function.parameters.len(),
               self.depth);

        self.depth += 1;
        let result = self.eval_block(&function.body, &frame);
        self.depth -= 1;

        match result {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
        }
    }
}
