/// Call dispatch and the builtin table.
///
/// Resolves the callee, checks argument counts, and runs either a builtin or
/// a user closure in a fresh scope.
pub mod core;
/// Builtin functions over values: `len`, `type`, and the array helpers.
pub mod builtin;
/// The `print` function implementation.
///
/// Formats its arguments and sends the line to the evaluator's output.
pub mod print;
