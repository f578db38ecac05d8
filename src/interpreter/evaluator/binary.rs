/// Dispatch for binary operations.
///
/// Evaluates both operands, then routes the pair to the handler for its
/// operator and operand types.
pub mod core;
/// Arithmetic and ordering on numbers, concatenation and equality on strings.
pub mod scalar;
/// Equality between values of any type.
pub mod comparison;
/// The logical connectives `&&` and `||`.
pub mod logic;
