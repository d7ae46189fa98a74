use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult, ExecResult},
        object::Object,
    },
};

impl Context {
    /// Resolves an identifier through the environment chain.
    ///
    /// # Errors
    /// Returns `RuntimeError::IdentifierNotFound` if no enclosing scope binds
    /// the name.
    pub fn eval_identifier(ident: &Identifier, env: &Env) -> EvalResult<Rc<Object>> {
        env.borrow()
           .get(&ident.name)
           .ok_or_else(|| RuntimeError::IdentifierNotFound { name: ident.name.clone(),
                                                             line: ident.line, })
    }

    /// Evaluates a conditional expression.
    ///
    /// If the condition is truthy, the consequence is evaluated; otherwise,
    /// the alternative (if any) is evaluated. A falsy condition without an
    /// alternative yields `null`.
    ///
    /// # Parameters
    /// - `condition`: Condition expression.
    /// - `consequence`: Block evaluated for a truthy condition.
    /// - `alternative`: Optional block evaluated for a falsy condition.
    /// - `env`: The current environment. Blocks do not open a new scope.
    ///
    /// # Returns
    /// The value of the evaluated branch.
    pub fn eval_if_expr(&mut self,
                        condition: &Expr,
                        consequence: &BlockStatement,
                        alternative: Option<&BlockStatement>,
                        env: &Env)
                        -> ExecResult<Rc<Object>> {
        let condition = self.eval(condition, env)?;

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Object::null())
        }
    }

    /// Evaluates the statements of a block in order.
    ///
    /// A `return` or a runtime fault in any statement stops the block and
    /// unwinds past it. An empty block yields `null`.
    ///
    /// # Parameters
    /// - `block`: The block to evaluate.
    /// - `env`: The current environment.
    ///
    /// # Returns
    /// The value of the last executed statement.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> ExecResult<Rc<Object>> {
        let mut result = Object::null();

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }

        Ok(result)
    }
}
