use mylang::{execute, interpreter::evaluator::function::core::BUILTIN_FUNCTIONS, run};
use pretty_assertions::assert_eq;

fn assert_evaluates(source: &str, expected: &str) {
    match run(source) {
        Ok(result) => assert_eq!(result, expected, "source: {source}"),
        Err(error) => panic!("{source:?} failed with: {error}"),
    }
}

fn assert_fails(source: &str, expected: &str) {
    match run(source) {
        Ok(result) => panic!("{source:?} should have failed but produced {result}"),
        Err(error) => assert_eq!(error.to_string(), expected, "source: {source}"),
    }
}

#[test]
fn every_builtin_is_a_global() {
    assert_eq!(BUILTIN_FUNCTIONS, ["print", "len", "type", "push", "pop", "first", "last", "rest"]);
    for name in BUILTIN_FUNCTIONS {
        assert_evaluates(&format!("type({name})"), "builtin");
    }
}

#[test]
fn len_counts_characters_and_elements() {
    assert_evaluates("len('hello')", "5");
    assert_evaluates("len('héllo')", "5");
    assert_evaluates("len('')", "0");
    assert_evaluates("len([1, 2, 3])", "3");
    assert_evaluates("len([])", "0");
    assert_fails("len(5)", "len() not supported for type: number");
    assert_fails("len({})", "len() not supported for type: object");
    assert_fails("len()", "Expected 1 arguments, got 0");
    assert_fails("len('a', 'b')", "Expected 1 arguments, got 2");
}

#[test]
fn type_names() {
    assert_evaluates("type(1)", "number");
    assert_evaluates("type('s')", "string");
    assert_evaluates("type(true)", "boolean");
    assert_evaluates("type(null)", "null");
    assert_evaluates("type([])", "array");
    assert_evaluates("type({})", "object");
    assert_evaluates("type(fn() {})", "function");
    assert_evaluates("fn named() {} type(named)", "function");
    assert_evaluates("type(len)", "builtin");
    assert_evaluates("type(type(1))", "string");
}

#[test]
fn push_returns_a_new_array() {
    assert_evaluates("let a = [1, 2]; let b = push(a, 3); [len(a), len(b)]", "[2, 3]");
    assert_evaluates("let a = [1, 2]; push(a, 3); a", "[1, 2]");
    assert_evaluates("push([1, 2], 3, 4)", "[1, 2, 3, 4]");
    assert_evaluates("push([])", "[]");
    assert_evaluates("push([], [1])", "[[1]]");
    assert_fails("push(1, 2)", "push() requires an array as first argument");
    assert_fails("push()", "push() requires an array as first argument");
}

#[test]
fn array_accessors() {
    assert_evaluates("pop([1, 2, 3])", "3");
    assert_evaluates("first([1, 2, 3])", "1");
    assert_evaluates("last([1, 2, 3])", "3");
    assert_evaluates("rest([1, 2, 3])", "[2, 3]");
    assert_evaluates("rest([1])", "[]");
}

#[test]
fn array_accessors_on_empty_arrays_yield_null() {
    assert_evaluates("pop([])", "null");
    assert_evaluates("first([])", "null");
    assert_evaluates("last([])", "null");
    assert_evaluates("rest([])", "null");
}

#[test]
fn array_accessors_do_not_mutate() {
    assert_evaluates("let a = [1, 2]; pop(a); a", "[1, 2]");
    assert_evaluates("let a = [1, 2]; rest(a); a", "[1, 2]");
}

#[test]
fn array_accessors_reject_other_types() {
    assert_fails("pop('abc')", "pop() requires an array");
    assert_fails("first(1)", "first() requires an array");
    assert_fails("last(null)", "last() requires an array");
    assert_fails("rest({})", "rest() requires an array");
    assert_fails("first([1], [2])", "Expected 1 arguments, got 2");
}

#[test]
fn print_joins_arguments_with_spaces() {
    let execution = execute("print(1, 'a', [1, 2], { k: null }); print(); print(true)");

    assert_eq!(execution.output, ["1 a [1, 2] { k: null }", "", "true"]);
    assert_eq!(execution.result, "null");
    assert_eq!(execution.error, None);
}

#[test]
fn builtins_are_first_class_values() {
    assert_evaluates("let size = len; size([1, 2])", "2");
    assert_evaluates("fn apply(f, x) { return f(x); } apply(first, [9, 8])", "9");
    assert_fails("len == len", "Unsupported operator == for types builtin and builtin");
}

#[test]
fn only_functions_can_be_called() {
    assert_fails("5()", "number is not a function");
    assert_fails("let o = {}; o.f()", "null is not a function");
    assert_fails("'s'(1)", "string is not a function");
}
