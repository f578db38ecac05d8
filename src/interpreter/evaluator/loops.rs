use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        evaluator::{
            control_flow::ControlFlow,
            core::{EvalResult, Evaluator},
        },
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

impl Evaluator {
    /// Evaluates a `while` loop.
    ///
    /// The condition is evaluated in `env` before every iteration and the
    /// body gets a fresh child scope each time. A `return` inside the body
    /// stops the loop and propagates.
    ///
    /// # Returns
    /// The value of the last body execution, or `null` if the body never
    /// ran.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Block,
                             env: &Env)
                             -> EvalResult<ControlFlow> {
        let mut result = ControlFlow::Normal(Value::Null);
        while self.eval(condition, env)?.is_truthy() {
            result = self.eval_block(body, env)?;
            if result.is_return() {
                break;
            }
        }
        Ok(result)
    }

    /// Evaluates a C-style `for` loop.
    ///
    /// The whole loop runs in one scope enclosing `env`, which holds anything
    /// the initializer declares. Each iteration then checks the condition (a
    /// missing condition counts as true), runs the body in its own child scope
    /// and evaluates the update expression.
    ///
    /// # Parameters
    /// - `init`: Optional statement run once before the first iteration.
    /// - `condition`: Optional loop condition.
    /// - `update`: Optional expression run after every iteration.
    /// - `body`: The loop body.
    /// - `env`: The enclosing scope.
    ///
    /// # Returns
    /// The value of the last body execution, or `null` if the body never
    /// ran.
    pub(crate) fn eval_for(&mut self,
                           init: Option<&Statement>,
                           condition: Option<&Expr>,
                           update: Option<&Expr>,
                           body: &Block,
                           env: &Env)
                           -> EvalResult<ControlFlow> {
        let loop_env = Environment::child(env);
        let result = self.run_for(init, condition, update, body, &loop_env);
        Environment::release(&loop_env);
        result
    }

    /// Runs the initializer and every iteration inside `loop_env`.
    fn run_for(&mut self,
               init: Option<&Statement>,
               condition: Option<&Expr>,
               update: Option<&Expr>,
               body: &Block,
               loop_env: &Env)
               -> EvalResult<ControlFlow> {
        if let Some(init) = init {
            self.eval_statement(init, loop_env)?;
        }

        let mut result = ControlFlow::Normal(Value::Null);
        loop {
            if let Some(condition) = condition
               && !self.eval(condition, loop_env)?.is_truthy()
            {
                break;
            }

            result = self.eval_block(body, loop_env)?;
            if result.is_return() {
                break;
            }

            if let Some(update) = update {
                self.eval(update, loop_env)?;
            }
        }
        Ok(result)
    }
}
