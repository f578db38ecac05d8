use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies an arithmetic, ordering or equality operator to two numbers.
    ///
    /// Division by zero is an error. Remainder by zero follows IEEE 754 and
    /// produces `NaN`.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] when dividing by `0`.
    /// - A type error for the logical operators, which are handled earlier.
    #[allow(clippy::float_cmp)]
    pub(crate) fn eval_number_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        let value = match op {
            Add => Value::Number(a + b),
            Sub => Value::Number(a - b),
            Mul => Value::Number(a * b),
            Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Value::Number(a / b)
            },
            Mod => Value::Number(a % b),
            Less => Value::Boolean(a < b),
            Greater => Value::Boolean(a > b),
            LessEqual => Value::Boolean(a <= b),
            GreaterEqual => Value::Boolean(a >= b),
            Equal => Value::Boolean(a == b),
            NotEqual => Value::Boolean(a != b),
            And | Or => return Err(unsupported(op, &Value::Number(a), &Value::Number(b))),
        };
        Ok(value)
    }

    /// Applies `+`, `==` or `!=` to two strings.
    ///
    /// # Errors
    /// Any other operator is a type error.
    pub(crate) fn eval_string_op(op: BinaryOperator, a: &str, b: &str) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::from(format!("{a}{b}"))),
            BinaryOperator::Equal => Ok(Value::Boolean(a == b)),
            BinaryOperator::NotEqual => Ok(Value::Boolean(a != b)),
            _ => Err(unsupported(op, &Value::from(a), &Value::from(b))),
        }
    }
}
