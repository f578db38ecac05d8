use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    value::core::Value,
};

/// Prints its arguments as one line and returns `null`.
///
/// Each argument is rendered with the value display rules and the results are
/// joined by single spaces. Called with no arguments it prints an empty
/// line. The line goes to the evaluator's output sink.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use mylang::interpreter::{
///     evaluator::{core::Evaluator, function::print::print},
///     value::core::Value,
/// };
///
/// let lines = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&lines);
/// let mut evaluator = Evaluator::with_output(move |line| sink.borrow_mut().push(line.to_string()));
///
/// let result = print(&mut evaluator, &[Value::from("x ="), Value::Number(42.0)]).unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(*lines.borrow(), vec!["x = 42".to_string()]);
/// ```
pub fn print(evaluator: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    let line = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");
    evaluator.emit(&line);
    Ok(Value::Null)
}
