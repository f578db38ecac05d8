use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, environment::Env},
    },
};

impl Evaluator {
    /// Evaluates both operands of a binary expression, left first, and
    /// combines them.
    ///
    /// Both sides are always evaluated, including for `&&` and `||`.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 env: &Env)
                                 -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Logical operators work on any pair through truthiness. Number pairs
    /// support every other operator. String pairs support `+`, `==` and
    /// `!=`. Remaining pairs only support `==` and `!=` (see
    /// [`Evaluator::eval_equality`]).
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use mylang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let joined = Evaluator::eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::from("b"));
    /// assert_eq!(joined.unwrap(), Value::from("ab"));
    ///
    /// let mixed = Evaluator::eval_binary(BinaryOperator::Equal, &Value::Number(5.0), &Value::from("5"));
    /// assert_eq!(mixed.unwrap(), Value::Boolean(false));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        match (op, left, right) {
            (And | Or, _, _) => Ok(Self::eval_logic(op, left, right)),
            (_, Value::Number(a), Value::Number(b)) => Self::eval_number_op(op, *a, *b),
            (_, Value::Str(a), Value::Str(b)) => Self::eval_string_op(op, a, b),
            _ => Self::eval_equality(op, left, right),
        }
    }
}

/// Builds the error for an operator that does not apply to the operand
/// types.
pub(crate) fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::type_error(format!("Unsupported operator {op} for types {} and {}",
                                     left.type_name(),
                                     right.type_name()))
}
