/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST directly, resolving names through a chain of
/// lexical scopes, calling closures and builtins, and threading `return`
/// outward as an ordinary result.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Owns the global scope and the output sink of one session.
/// - Reports runtime faults such as undefined names, type mismatches, wrong
///   argument counts and division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces positioned tokens:
/// keywords, identifiers, number and string literals, operators and
/// punctuation. Whitespace and `//` comments are dropped.
///
/// # Responsibilities
/// - Converts the input text into tokens with 1-based line and column.
/// - Resolves keywords against identifiers by longest match.
/// - Collects every unrecognised character instead of stopping at the first.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// builds AST nodes directly and keeps going after a syntax error so that all
/// independent errors are reported together.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Reports grammar violations with the position of the offending token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (numbers, strings, booleans, `null`, arrays,
/// objects, closures and builtins), the scope chain that names resolve
/// through, and the rules for rendering values as text.
///
/// # Responsibilities
/// - Defines truthiness and the type names seen by programs.
/// - Implements scopes with shadowing, `const` protection and assignment to
///   the nearest owner.
/// - Formats values for `print` and for the host.
pub mod value;
