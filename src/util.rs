/// Numeric conversion and rendering helpers.
///
/// This module converts guest numbers (always `f64`) into host indices
/// without silent wrap-around, and renders them the way the language prints
/// numbers.
pub mod num;
