//! # mylang
//!
//! mylang is a small dynamically-typed scripting language written in Rust.
//! It lexes, parses and evaluates programs with `let`/`const` bindings,
//! closures, arrays, objects, C-style loops and a handful of builtins.
//!
//! The quickest way in is [`run`], which evaluates a source string and
//! renders the result. Hosts that want the printed output as data use
//! [`execute`]; hosts that keep a session alive across inputs (such as a
//! REPL) use [`parse`] together with an [`Evaluator`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Program,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};
pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Evaluator,
        value::{core::Value, display::value_to_string},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser and walked by the evaluator. Nodes carry no source positions.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code.
///
/// # Responsibilities
/// - Defines the lexing and parsing diagnostics, which carry source
///   positions and are returned as data.
/// - Defines the runtime faults that abort evaluation.
/// - Renders every error as the message shown to users.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and rendering.
pub mod util;

/// Lexes and parses a source string.
///
/// Diagnostics are rendered as `"Lexer error at L:C: ..."` or
/// `"Parse error at L:C: ..."`. If lexing fails the parser is not run and
/// the program is empty. A non-empty diagnostic list means the program must
/// not be evaluated.
///
/// # Examples
/// ```
/// use mylang::parse;
///
/// let (program, diagnostics) = parse("let x = 1 + 2;");
/// assert!(diagnostics.is_empty());
/// assert_eq!(program.statements.len(), 1);
///
/// let (_, diagnostics) = parse("let x = 1 @ 2;");
/// assert_eq!(diagnostics, ["Lexer error at 1:11: unexpected character '@'"]);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let lexed = tokenize(source);
    if !lexed.errors.is_empty() {
        let diagnostics = lexed.errors.iter().map(ToString::to_string).collect();
        return (Program::default(), diagnostics);
    }

    let (program, errors) = parse_program(&lexed.tokens);
    (program, errors.iter().map(ToString::to_string).collect())
}

/// Evaluates a source string on a fresh evaluator and renders the result.
///
/// `print` output goes to standard output.
///
/// # Errors
/// - [`Error::Syntax`] with every diagnostic if the source does not parse.
/// - [`Error::Runtime`] with the first fault raised during evaluation.
///
/// # Examples
/// ```
/// use mylang::run;
///
/// assert_eq!(run("1 + 2 * 3").unwrap(), "7");
/// assert_eq!(run("let xs = [1, 2]; push(xs, 3)").unwrap(), "[1, 2, 3]");
/// assert_eq!(run("1 / 0").unwrap_err().to_string(), "Division by zero");
/// ```
pub fn run(source: &str) -> Result<String, Error> {
    let (program, diagnostics) = parse(source);
    if !diagnostics.is_empty() {
        return Err(Error::Syntax(diagnostics));
    }

    let mut evaluator = Evaluator::new();
    let value = evaluator.evaluate(&program)?;
    Ok(value_to_string(&value))
}

/// The outcome of [`execute`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Lines printed by the program, in order. Lines printed before a
    /// runtime fault are kept.
    pub output: Vec<String>,
    /// The rendered result; empty when `error` is set.
    pub result: String,
    /// The syntax diagnostics joined by newlines, or the runtime fault.
    pub error:  Option<String>,
}

/// Evaluates a source string and captures everything it produces.
///
/// Unlike [`run`], printed lines are collected instead of written to
/// standard output, and failures are reported inside the returned value.
///
/// # Examples
/// ```
/// use mylang::execute;
///
/// let execution = execute("print(\"a\"); print(1, 2); 40 + 2");
/// assert_eq!(execution.output, ["a", "1 2"]);
/// assert_eq!(execution.result, "42");
/// assert_eq!(execution.error, None);
///
/// let failed = execute("print(\"before\"); missing");
/// assert_eq!(failed.output, ["before"]);
/// assert_eq!(failed.error.as_deref(), Some("Undefined variable: missing"));
/// ```
#[must_use]
pub fn execute(source: &str) -> Execution {
    let (program, diagnostics) = parse(source);
    if !diagnostics.is_empty() {
        return Execution { error: Some(diagnostics.join("\n")),
                           ..Execution::default() };
    }

    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    let mut evaluator =
        Evaluator::with_output(move |line| sink.borrow_mut().push(line.to_string()));
    let outcome = evaluator.evaluate(&program);
    drop(evaluator);

    let output = lines.take();
    match outcome {
        Ok(value) => Execution { output,
                                 result: value_to_string(&value),
                                 error: None },
        Err(error) => Execution { output,
                                  result: String::new(),
                                  error: Some(error.to_string()) },
    }
}
