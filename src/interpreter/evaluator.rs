/// Core evaluation logic and the evaluator session.
///
/// Contains the `Evaluator` type, statement and expression dispatch, and the
/// output channel used by `print`.
pub mod core;

/// The result of evaluating a statement.
///
/// Distinguishes ordinary completion from a pending `return` so that the
/// signal can travel outward through blocks and loops.
pub mod control_flow;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons, equality and the
/// logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Evaluation of `while` and `for` loops.
pub mod loops;

/// Function evaluation.
///
/// Handles calls to user-defined closures and builtins, argument count
/// checks and the builtin library itself.
pub mod function;

/// Utility functions for evaluation.
///
/// Declarations, blocks, conditionals, collection literals, indexing and
/// member access.
pub mod utils;
