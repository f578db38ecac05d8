/// Runtime value representation.
///
/// Declares the `Value` enum together with the closure and builtin payloads,
/// truthiness, and the type names reported by `type()`.
pub mod core;
/// Lexical scopes.
///
/// Defines the `Environment` scope node: a binding table, the set of names
/// declared `const`, and a shared link to the parent scope. Closures keep
/// their defining scope alive through that shared link.
pub mod environment;
/// Rendering of values as text, used for `print` output and for the final
/// result handed back to the host.
pub mod display;
