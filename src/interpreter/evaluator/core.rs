use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{control_flow::ControlFlow, function::core::builtin_bindings},
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Receives every line produced by `print`.
pub type Output = Box<dyn FnMut(&str)>;

/// An evaluation session.
///
/// Owns the global scope, which starts out holding the builtin library, and
/// the sink that `print` writes to. Programs evaluated one after another on
/// the same instance share the global scope, so a definition made by one
/// call to [`Evaluator::evaluate`] is visible to the next. Separate instances
/// never share anything.
///
/// Guest recursion is host recursion: a guest program that recurses deeply
/// enough overflows the host stack.
///
/// ## Usage
///
/// ```
/// use mylang::{interpreter::evaluator::core::Evaluator, parse};
///
/// let mut evaluator = Evaluator::with_output(|line| assert_eq!(line, "hi 3"));
/// let (program, errors) = parse("let n = 3; print(\"hi\", n); n * 2");
/// assert!(errors.is_empty());
///
/// let result = evaluator.evaluate(&program).unwrap();
/// assert_eq!(result.to_string(), "6");
/// ```
pub struct Evaluator {
    globals: Env,
    output:  Output,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator whose `print` writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(|line| println!("{line}"))
    }

    /// Creates an evaluator that hands every printed line to `output`.
    ///
    /// The line is already formatted and carries no trailing newline.
    #[must_use]
    pub fn with_output(output: impl FnMut(&str) + 'static) -> Self {
        Self { globals: Environment::global_with(builtin_bindings()),
               output:  Box::new(output), }
    }

    /// Returns the global scope of this session.
    #[must_use]
    pub const fn globals(&self) -> &Env {
        &self.globals
    }

    /// Evaluates a program in the global scope.
    ///
    /// The result is the value of the last top-level statement, or the
    /// payload of a top-level `return`, which also stops the program. An empty
    /// program evaluates to `null`.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; the rest of the program is
    /// not evaluated. Bindings made before the fault stay in the global scope.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Value> {
        let globals = Rc::clone(&self.globals);
        let flow = self.eval_statements(&program.statements, &globals)?;
        tracing::debug!(returned = flow.is_return(), "program finished");
        Ok(flow.into_value())
    }

    /// Sends one formatted line to the output sink.
    pub(crate) fn emit(&mut self, line: &str) {
        (self.output)(line);
    }

    /// Evaluates statements in order within `env`.
    ///
    /// The value of the sequence is the value of its last statement. A
    /// [`ControlFlow::Return`] stops the sequence and is passed on unchanged.
    pub fn eval_statements(&mut self,
                           statements: &[Statement],
                           env: &Env)
                           -> EvalResult<ControlFlow> {
        let mut result = ControlFlow::Normal(Value::Null);
        for statement in statements {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                break;
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations evaluate to `null`. Expression statements evaluate to
    /// their expression. Compound statements report the value of whatever
    /// they ran last.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The scope the statement runs in.
    ///
    /// # Returns
    /// How the statement completed.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<ControlFlow> {
        match statement {
            Statement::Let { name, value } => self.eval_declaration(name, value, false, env),
            Statement::Const { name, value } => self.eval_declaration(name, value, true, env),
            Statement::Expression(expr) => Ok(ControlFlow::Normal(self.eval(expr, env)?)),
            Statement::Block(block) => self.eval_block(block, env),
            Statement::If(statement) => self.eval_if(statement, env),
            Statement::While { condition, body } => self.eval_while(condition, body, env),
            Statement::For { init,
                             condition,
                             update,
                             body, } => {
                self.eval_for(init.as_deref(), condition.as_ref(), update.as_ref(), body, env)
            },
            Statement::Function { name, def } => {
                env.define(name, Self::make_closure(def, env), false)?;
                Ok(ControlFlow::Normal(Value::Null))
            },
            Statement::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Null,
                };
                Ok(ControlFlow::Return(value))
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; operands are always evaluated
    /// left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The scope used to resolve names.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Identifier(name) => env.get(name),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right, env),
            Expr::UnaryOp { op, operand } => {
                let operand = self.eval(operand, env)?;
                Self::eval_unary(*op, &operand)
            },
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments, env),
            Expr::Member { object, property } => {
                let object = self.eval(object, env)?;
                Self::eval_member(&object, property)
            },
            Expr::Index { object, index } => {
                let object = self.eval(object, env)?;
                let index = self.eval(index, env)?;
                Self::eval_index(&object, &index)
            },
            Expr::Assignment { name, value } => {
                let value = self.eval(value, env)?;
                env.assign(name, value.clone())?;
                Ok(value)
            },
            Expr::ArrayLiteral { elements } => self.eval_array_literal(elements, env),
            Expr::ObjectLiteral { properties } => self.eval_object_literal(properties, env),
            Expr::Function(def) => Ok(Self::make_closure(def, env)),
        }
    }
}

impl Drop for Evaluator {
    fn drop(&mut self) {
        // Functions declared at top level capture the global scope that also
        // holds them.
        self.globals.clear();
    }
}
