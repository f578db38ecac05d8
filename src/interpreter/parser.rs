/// Parser entry points.
///
/// Holds the program-level loop with error recovery and the top of the
/// expression grammar (assignment).
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to the
/// multiplicative operators. Every level is left-associative.
pub mod binary;

/// Unary, postfix and primary expressions.
///
/// Covers prefix `-` and `!`, call/index/member chains, literals, array and
/// object literals, function expressions and parenthesised groups.
pub mod unary;

/// Statement parsing.
///
/// Dispatches on the leading keyword to declarations, control flow, function
/// declarations and `return`, falling back to expression statements.
pub mod statement;

/// Braced statement blocks used by control constructs and function bodies.
pub mod block;

/// Shared helpers: token expectations, identifiers, comma-separated lists
/// and parameter lists.
pub mod utils;
