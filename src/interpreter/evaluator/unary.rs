use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; any other operand is a type error.
    /// - `Not`: negated truthiness, accepted for every value.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use mylang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::from("")).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, &Value::Null).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(RuntimeError::type_error(format!("Cannot negate {}",
                                                              other.type_name()))),
            },
            UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }
}
