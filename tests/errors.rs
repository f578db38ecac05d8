use mylang::{
    Error, Evaluator, execute,
    error::{ParseError, RuntimeError},
    interpreter::lexer::{Position, Token, tokenize},
    parse, run,
};
use pretty_assertions::assert_eq;

fn runtime_error(source: &str) -> RuntimeError {
    match run(source) {
        Err(Error::Runtime(error)) => error,
        other => panic!("{source:?} should have raised a runtime error, got {other:?}"),
    }
}

fn type_error(details: &str) -> RuntimeError {
    RuntimeError::TypeError { details: details.to_string() }
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_error("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("let z = 0; 10 / z"), RuntimeError::DivisionByZero);
}

#[test]
fn name_errors() {
    assert_eq!(runtime_error("missing"),
               RuntimeError::UndefinedVariable { name: "missing".to_string() });
    assert_eq!(runtime_error("missing = 1"),
               RuntimeError::UndefinedVariable { name: "missing".to_string() });
    assert_eq!(runtime_error("let a = 1; let a = 2;"),
               RuntimeError::DuplicateDefinition { name: "a".to_string() });
    assert_eq!(runtime_error("fn f(a, a) {} f(1, 2)"),
               RuntimeError::DuplicateDefinition { name: "a".to_string() });
    assert_eq!(runtime_error("const k = 1; k = 2"),
               RuntimeError::ConstReassignment { name: "k".to_string() });
}

#[test]
fn operator_type_errors() {
    assert_eq!(runtime_error("'a' - 1"),
               type_error("Unsupported operator - for types string and number"));
    assert_eq!(runtime_error("'a' < 'b'"),
               type_error("Unsupported operator < for types string and string"));
    assert_eq!(runtime_error("true + 1"),
               type_error("Unsupported operator + for types boolean and number"));
    assert_eq!(runtime_error("null > null"),
               type_error("Unsupported operator > for types null and null"));
    assert_eq!(runtime_error("[1] == [1]"),
               type_error("Unsupported operator == for types array and array"));
    assert_eq!(runtime_error("{} != {}"),
               type_error("Unsupported operator != for types object and object"));
    assert_eq!(runtime_error("-'x'"), type_error("Cannot negate string"));
    assert_eq!(runtime_error("-null"), type_error("Cannot negate null"));
}

#[test]
fn access_type_errors() {
    assert_eq!(runtime_error("[1]['a']"), type_error("Cannot index array with string"));
    assert_eq!(runtime_error("({})[0]"), type_error("Cannot index object with number"));
    assert_eq!(runtime_error("5[0]"), type_error("Cannot index number with number"));
    assert_eq!(runtime_error("5.x"), type_error("Cannot access property on number"));
    assert_eq!(runtime_error("[1].length"), type_error("Cannot access property on array"));
}

#[test]
fn arity_mismatch() {
    assert_eq!(runtime_error("fn f(a) { a } f(1, 2)"),
               RuntimeError::ArityMismatch { expected: 1,
                                             found:    2, });
    assert_eq!(runtime_error("fn f(a, b) { a } f()"),
               RuntimeError::ArityMismatch { expected: 2,
                                             found:    0, });
    assert_eq!(RuntimeError::ArityMismatch { expected: 2,
                                             found:    3, }.to_string(),
               "Expected 2 arguments, got 3");
}

#[test]
fn the_first_fault_aborts_the_program() {
    let execution = execute("print(1); 1 / 0; print(2)");

    assert_eq!(execution.output, ["1"]);
    assert_eq!(execution.result, "");
    assert_eq!(execution.error.as_deref(), Some("Division by zero"));
}

#[test]
fn faults_inside_calls_propagate() {
    assert_eq!(runtime_error("fn inner() { return nope; } fn outer() { return inner() + 1; } outer()"),
               RuntimeError::UndefinedVariable { name: "nope".to_string() });
    assert_eq!(runtime_error("for (let i = 0; i < 3; i = i + 1) { if (i == 2) { i / 0; } }"),
               RuntimeError::DivisionByZero);
}

#[test]
fn effects_before_a_fault_persist_in_the_session() {
    let mut evaluator = Evaluator::with_output(|_| {});

    let (program, _) = parse("let a = 1; a = 2; undefinedName; a = 3;");
    assert!(evaluator.evaluate(&program).is_err());

    let (program, _) = parse("a");
    assert_eq!(evaluator.evaluate(&program).map(|value| value.to_string()),
               Ok("2".to_string()));
}

#[test]
fn syntax_errors_are_reported_as_a_list() {
    assert_eq!(run("let = 1"),
               Err(Error::Syntax(vec!["Parse error at 1:5: expected identifier, found '='".to_string()])));

    let error = run("let = 1;\n)").unwrap_err();
    assert_eq!(error.to_string(),
               "Parse error at 1:5: expected identifier, found '='\n\
                Parse error at 2:1: expected expression, found ')'");
}

#[test]
fn syntax_errors_stop_evaluation() {
    let execution = execute("print('never'); let = 1;");

    assert!(execution.output.is_empty());
    assert_eq!(execution.result, "");
    assert_eq!(execution.error.as_deref(),
               Some("Parse error at 1:21: expected identifier, found '='"));
}

#[test]
fn lex_errors_are_all_reported() {
    let execution = execute("let a = 1 @\nlet b = #;");

    assert_eq!(execution.error.as_deref(),
               Some("Lexer error at 1:11: unexpected character '@'\n\
                     Lexer error at 2:9: unexpected character '#'"));
}

#[test]
fn error_positions() {
    let lexed = tokenize("let x = $;");
    assert_eq!(lexed.errors[0].position(), Position::new(1, 9));

    let error = ParseError::unexpected("identifier", &Token::Number(1.0), Position::new(3, 7));
    assert_eq!(error.position(), Position::new(3, 7));
    assert_eq!(error.to_string(), "Parse error at 3:7: expected identifier, found '1'");

    let eof = ParseError::unexpected("'}'", &Token::Eof, Position::new(1, 2));
    assert_eq!(eof,
               ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                  position: Position::new(1, 2), });
    assert_eq!(eof.to_string(), "Parse error at 1:2: expected '}', found end of input");
}
