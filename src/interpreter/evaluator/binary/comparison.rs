use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates `==` and `!=` for operand pairs that are not both numbers or
    /// both strings.
    ///
    /// Values of different types are never equal, whatever their contents.
    /// Two booleans compare by value and two `null`s are equal. Every other
    /// pair, and every other operator, is a type error; in particular arrays,
    /// objects and functions cannot be compared.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use mylang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let eq = Evaluator::eval_equality(BinaryOperator::Equal, &Value::Null, &Value::Null);
    /// assert_eq!(eq.unwrap(), Value::Boolean(true));
    ///
    /// let ne = Evaluator::eval_equality(BinaryOperator::NotEqual, &Value::Null, &Value::Boolean(false));
    /// assert_eq!(ne.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let equal = match op {
            BinaryOperator::Equal => true,
            BinaryOperator::NotEqual => false,
            _ => return Err(unsupported(op, left, right)),
        };

        if !left.same_type(right) {
            return Ok(Value::Boolean(!equal));
        }

        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean((a == b) == equal)),
            (Value::Null, Value::Null) => Ok(Value::Boolean(equal)),
            _ => Err(unsupported(op, left, right)),
        }
    }
}
