use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator {
    /// Combines two already evaluated operands by truthiness.
    ///
    /// The result is always a boolean, never one of the operands. Any operator
    /// other than `&&` is treated as `||`.
    pub(crate) fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let (left, right) = (left.is_truthy(), right.is_truthy());
        match op {
            BinaryOperator::And => Value::Boolean(left && right),
            _ => Value::Boolean(left || right),
        }
    }
}
