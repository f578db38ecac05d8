use std::{cell::RefCell, rc::Rc};

use mylang::{
    Evaluator, Execution, Value,
    ast::{Block, FunctionDef},
    execute,
    error::RuntimeError,
    interpreter::value::{
        core::Closure,
        environment::{Env, Environment},
    },
    parse, run, value_to_string,
};
use pretty_assertions::assert_eq;

fn evaluate(evaluator: &mut Evaluator, source: &str) -> Result<Value, RuntimeError> {
    let (program, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
    evaluator.evaluate(&program)
}

#[test]
fn evaluate_returns_values() {
    let mut evaluator = Evaluator::with_output(|_| {});

    assert_eq!(evaluate(&mut evaluator, "1 + 2 * 3"), Ok(Value::Number(7.0)));
    assert_eq!(evaluate(&mut evaluator, "'a' + 'b'"), Ok(Value::from("ab")));
    assert_eq!(evaluate(&mut evaluator, "[1, true]"),
               Ok(Value::from(vec![Value::Number(1.0), Value::Boolean(true)])));
    assert_eq!(evaluate(&mut evaluator, "let quiet = 1;"), Ok(Value::Null));
}

#[test]
fn sessions_keep_their_globals() {
    let mut evaluator = Evaluator::with_output(|_| {});

    evaluate(&mut evaluator, "let x = 2; fn double(n) { n * 2 }").unwrap();
    assert_eq!(evaluate(&mut evaluator, "double(x) * 10 + x").map(|v| v.to_string()),
               Ok("42".to_string()));
    assert_eq!(evaluate(&mut evaluator, "let x = 3;"),
               Err(RuntimeError::DuplicateDefinition { name: "x".to_string() }));
    assert!(evaluator.globals().has_own("double"));
}

#[test]
fn sessions_are_isolated() {
    let mut first = Evaluator::with_output(|_| {});
    let mut second = Evaluator::with_output(|_| {});

    evaluate(&mut first, "let y = 1;").unwrap();
    assert_eq!(evaluate(&mut second, "y"),
               Err(RuntimeError::UndefinedVariable { name: "y".to_string() }));
}

#[test]
fn output_sink_receives_lines_in_order() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    let mut evaluator = Evaluator::with_output(move |line| sink.borrow_mut().push(line.to_string()));

    evaluate(&mut evaluator, "for (let i = 0; i < 3; i = i + 1) { print('line', i); }").unwrap();
    evaluate(&mut evaluator, "print({ done: true })").unwrap();

    assert_eq!(*lines.borrow(), ["line 0", "line 1", "line 2", "{ done: true }"]);
}

#[test]
fn execute_collects_everything() {
    assert_eq!(execute("print('hi'); 1 + 1"),
               Execution { output: vec!["hi".to_string()],
                           result: "2".to_string(),
                           error:  None, });
    assert_eq!(execute("print('partial'); nope"),
               Execution { output: vec!["partial".to_string()],
                           result: String::new(),
                           error:  Some("Undefined variable: nope".to_string()), });
    assert_eq!(execute(""),
               Execution { output: vec![],
                           result: "null".to_string(),
                           error:  None, });
}

#[test]
fn literals_survive_a_render_and_reparse() {
    for source in ["42", "3.5", "-7", "0.25", "true", "false", "null", "[1, [2, 3], []]"] {
        let rendered = run(source).unwrap();
        assert_eq!(run(&rendered).unwrap(), rendered, "round trip of {source}");
    }

    let rendered = run("'text'").unwrap();
    assert_eq!(run(&format!("'{rendered}'")).unwrap(), rendered);
}

#[test]
fn extreme_magnitudes_render_without_exponents() {
    assert_eq!(run("0.0000001").unwrap(), "0.0000001");
    assert_eq!(run("1000000000000000000000").unwrap(), "1000000000000000000000");
    assert_eq!(run("1 / 10000000").unwrap(), "0.0000001");

    for source in ["0.0000001", "1000000000000000000000", "123456789012345680000000"] {
        let rendered = run(source).unwrap();
        assert!(!rendered.contains('e'), "{rendered}");
        assert_eq!(run(&rendered).unwrap(), rendered, "round trip of {source}");
    }
}

#[test]
fn value_rendering_helpers() {
    let object = Value::from(indexmap_of(&[("b", Value::Number(1.0)), ("a", Value::Null)]));

    assert_eq!(value_to_string(&object), "{ b: 1, a: null }");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::from("raw").to_string(), "raw");
}

#[test]
fn values_report_their_type_and_truthiness() {
    assert_eq!(Value::Number(0.0).type_name(), "number");
    assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "array");
    assert!(!Value::Number(0.0).is_truthy());
    assert!(Value::Number(f64::NAN).is_truthy());
    assert!(Value::from(indexmap_of(&[])).is_truthy());
    assert!(!Value::from(Vec::<Value>::new()).is_truthy());
}

#[test]
fn environments_chain_lookups() {
    let global = Environment::global();
    global.define("a", Value::Number(1.0), false).unwrap();
    global.define("k", Value::Number(2.0), true).unwrap();

    let child = Environment::child(&global);
    child.define("b", Value::Boolean(true), false).unwrap();

    assert_eq!(child.get("a"), Ok(Value::Number(1.0)));
    assert_eq!(child.get("b"), Ok(Value::Boolean(true)));
    assert_eq!(global.get("b"), Err(RuntimeError::UndefinedVariable { name: "b".to_string() }));

    child.assign("a", Value::Number(5.0)).unwrap();
    assert_eq!(global.get("a"), Ok(Value::Number(5.0)));
    assert!(!child.has_own("a"));

    assert_eq!(child.assign("k", Value::Null),
               Err(RuntimeError::ConstReassignment { name: "k".to_string() }));
    assert_eq!(child.define("a", Value::Null, false), Ok(()));
    assert_eq!(child.define("a", Value::Null, false),
               Err(RuntimeError::DuplicateDefinition { name: "a".to_string() }));
}

fn bind_self_closure(scope: &Env, name: &str) -> Value {
    let def = Rc::new(FunctionDef { params: vec![],
                                    body:   Block::default(), });
    let function = Value::Function(Rc::new(Closure { def,
                                                     env: Rc::clone(scope) }));
    scope.define(name, function.clone(), false).unwrap();
    function
}

#[test]
fn released_scopes_drop_their_own_closures() {
    let scope = Environment::child(&Environment::global());
    drop(bind_self_closure(&scope, "even"));
    drop(bind_self_closure(&scope, "odd"));
    scope.define("n", Value::Number(1.0), false).unwrap();

    let weak = Rc::downgrade(&scope);
    Environment::release(&scope);
    drop(scope);
    assert!(weak.upgrade().is_none());
}

#[test]
fn reachable_scopes_are_not_released() {
    let scope = Environment::child(&Environment::global());
    let escaped = bind_self_closure(&scope, "next");
    scope.define("n", Value::Number(1.0), false).unwrap();

    Environment::release(&scope);
    assert_eq!(scope.get("n"), Ok(Value::Number(1.0)));
    assert!(scope.has_own("next"));

    let held = Rc::clone(&scope);
    drop(escaped);
    Environment::release(&scope);
    assert!(held.has_own("n"));

    drop(held);
    Environment::release(&scope);
    assert!(!scope.has_own("n"));
}

fn indexmap_of(entries: &[(&str, Value)]) -> indexmap::IndexMap<String, Value> {
    entries.iter()
           .map(|(key, value)| ((*key).to_string(), value.clone()))
           .collect()
}
