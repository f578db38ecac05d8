use indexmap::IndexMap;

use crate::{
    ast::{Block, ElseBranch, Expr, IfStatement},
    error::RuntimeError,
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
    util::num::f64_to_index,
};

impl Evaluator {
    /// Evaluates a `let` or `const` declaration.
    ///
    /// The initializer is evaluated first, then the name is bound in `env`.
    ///
    /// # Returns
    /// `null`; declarations have no value of their own.
    ///
    /// # Errors
    /// [`RuntimeError::DuplicateDefinition`] if `env` already binds `name`.
    pub(crate) fn eval_declaration(&mut self,
                                   name: &str,
                                   value: &Expr,
                                   constant: bool,
                                   env: &Env)
                                   -> EvalResult<ControlFlow> {
        let value = self.eval(value, env)?;
        env.define(name, value, constant)?;
        Ok(ControlFlow::Normal(Value::Null))
    }

    /// Evaluates a block in a new child scope of `env`.
    ///
    /// The scope is released on the way out, so functions declared in the
    /// block do not keep it alive unless they escape.
    pub(crate) fn eval_block(&mut self, block: &Block, env: &Env) -> EvalResult<ControlFlow> {
        let scope = Environment::child(env);
        let result = self.eval_statements(&block.statements, &scope);
        Environment::release(&scope);
        result
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition is tested for truthiness. `else if` chains recurse.
    ///
    /// # Returns
    /// The value of the branch taken, or `null` if no branch ran.
    pub(crate) fn eval_if(&mut self, statement: &IfStatement, env: &Env) -> EvalResult<ControlFlow> {
        if self.eval(&statement.condition, env)?.is_truthy() {
            return self.eval_block(&statement.consequence, env);
        }

        match &statement.alternative {
            Some(ElseBranch::Block(block)) => self.eval_block(block, env),
            Some(ElseBranch::If(nested)) => self.eval_if(nested, env),
            None => Ok(ControlFlow::Normal(Value::Null)),
        }
    }

    /// Evaluates the elements of an array literal from left to right.
    pub(crate) fn eval_array_literal(&mut self, elements: &[Expr], env: &Env) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element, env))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Evaluates an object literal.
    ///
    /// Properties keep their source order. A repeated key keeps its first
    /// position and takes the last value.
    pub(crate) fn eval_object_literal(&mut self,
                                      properties: &[(String, Expr)],
                                      env: &Env)
                                      -> EvalResult<Value> {
        let mut object = IndexMap::with_capacity(properties.len());
        for (key, value) in properties {
            let value = self.eval(value, env)?;
            object.insert(key.clone(), value);
        }
        Ok(Value::from(object))
    }

    /// Evaluates `object[index]`.
    ///
    /// - Arrays and strings take a number, which is floored. An index
    ///   outside the bounds, negative ones included, yields `null`. Strings
    ///   are indexed by character and yield one-character strings.
    /// - Objects take a string key; a missing key yields `null`.
    ///
    /// # Errors
    /// Any other combination is a type error.
    ///
    /// # Example
    /// ```
    /// use mylang::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let array = Value::from(vec![Value::Number(10.0), Value::Number(20.0)]);
    /// assert_eq!(Evaluator::eval_index(&array, &Value::Number(1.7)).unwrap(), Value::Number(20.0));
    /// assert_eq!(Evaluator::eval_index(&array, &Value::Number(-1.0)).unwrap(), Value::Null);
    /// assert_eq!(Evaluator::eval_index(&Value::from("hey"), &Value::Number(0.0)).unwrap(),
    ///            Value::from("h"));
    /// ```
    pub fn eval_index(object: &Value, index: &Value) -> EvalResult<Value> {
        match (object, index) {
            (Value::Array(elements), Value::Number(n)) => {
                Ok(f64_to_index(*n).and_then(|i| elements.get(i))
                                   .cloned()
                                   .unwrap_or(Value::Null))
            },
            (Value::Str(s), Value::Number(n)) => {
                Ok(f64_to_index(*n).and_then(|i| s.chars().nth(i))
                                   .map_or(Value::Null, |c| Value::from(c.to_string())))
            },
            (Value::Object(properties), Value::Str(key)) => {
                Ok(properties.get(&**key).cloned().unwrap_or(Value::Null))
            },
            _ => Err(RuntimeError::type_error(format!("Cannot index {} with {}",
                                                      object.type_name(),
                                                      index.type_name()))),
        }
    }

    /// Evaluates `object.property`.
    ///
    /// # Errors
    /// Member access on anything but an object is a type error.
    pub fn eval_member(object: &Value, property: &str) -> EvalResult<Value> {
        match object {
            Value::Object(properties) => Ok(properties.get(property).cloned().unwrap_or(Value::Null)),
            other => Err(RuntimeError::type_error(format!("Cannot access property on {}",
                                                          other.type_name()))),
        }
    }
}
