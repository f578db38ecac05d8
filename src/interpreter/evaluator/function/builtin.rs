use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::usize_to_f64,
};

/// Returns the length of a string (in characters) or an array.
///
/// # Example
/// ```
/// use mylang::interpreter::{
///     evaluator::{core::Evaluator, function::builtin::len},
///     value::core::Value,
/// };
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(len(&mut evaluator, &[Value::from("héllo")]).unwrap(), Value::Number(5.0));
/// assert!(len(&mut evaluator, &[Value::Null]).is_err());
/// ```
pub fn len(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Str(s)] => Ok(Value::Number(usize_to_f64(s.chars().count()))),
        [Value::Array(elements)] => Ok(Value::Number(usize_to_f64(elements.len()))),
        [other, ..] => Err(RuntimeError::type_error(format!("len() not supported for type: {}",
                                                            other.type_name()))),
        [] => Err(RuntimeError::ArityMismatch { expected: 1,
                                                found:    0, }),
    }
}

/// Returns the type name of its argument as a string.
pub fn type_of(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match args {
        [value, ..] => Ok(Value::from(value.type_name())),
        [] => Err(RuntimeError::ArityMismatch { expected: 1,
                                                found:    0, }),
    }
}

/// Returns a new array holding the elements of the first argument followed
/// by every remaining argument. The original array is left untouched.
///
/// # Errors
/// A type error if the first argument is missing or not an array.
pub fn push(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Array(elements), items @ ..] => {
            let mut pushed = Vec::with_capacity(elements.len() + items.len());
            pushed.extend(elements.iter().cloned());
            pushed.extend(items.iter().cloned());
            Ok(Value::from(pushed))
        },
        _ => Err(RuntimeError::type_error("push() requires an array as first argument")),
    }
}

/// Returns the last element of an array, or `null` if it is empty.
///
/// Like every array builtin this does not modify its argument.
pub fn pop(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("pop", args)?;
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("first", args)?;
    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    let elements = array_argument("last", args)?;
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array of every element but the first, or `null` if the
/// array is empty.
///
/// # Example
/// ```
/// use mylang::interpreter::{
///     evaluator::{core::Evaluator, function::builtin::rest},
///     value::core::Value,
/// };
///
/// let mut evaluator = Evaluator::new();
/// let array = Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]);
/// assert_eq!(rest(&mut evaluator, &[array]).unwrap().to_string(), "[2, 3]");
/// assert_eq!(rest(&mut evaluator, &[Value::from(Vec::new())]).unwrap(), Value::Null);
/// ```
pub fn rest(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match array_argument("rest", args)? {
        [] => Ok(Value::Null),
        [_, tail @ ..] => Ok(Value::from(tail.to_vec())),
    }
}

/// Extracts the elements of the single array argument of `name`.
fn array_argument<'v>(name: &str, args: &'v [Value]) -> EvalResult<&'v [Value]> {
    match args {
        [Value::Array(elements)] => Ok(elements.as_slice()),
        _ => Err(RuntimeError::type_error(format!("{name}() requires an array"))),
    }
}
