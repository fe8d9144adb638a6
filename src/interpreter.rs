/// The environment module holds the table of known names.
///
/// It maps builtin procedure names and named constants to their symbols and
/// turns tokens into symbols, parsing literal numbers along the way.
///
/// # Responsibilities
/// - Builds the standard, read-only table of builtins and constants.
/// - Resolves tokens to symbols, reporting unknown names and bad literals.
pub mod environment;
/// The evaluator module walks parsed trees and computes results.
///
/// # Responsibilities
/// - Evaluates call arguments eagerly, left to right, depth first.
/// - Applies builtin procedures and wraps failures from inside arguments.
/// - Enforces the nesting limit during evaluation.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// Parentheses become their own tokens, the rest is split on whitespace, and
/// each word is classified by its shape and by the token before it.
pub mod lexer;
/// The parser module builds trees from tokens.
///
/// # Responsibilities
/// - Turns each parenthesized group into a call node named by its first word.
/// - Rejects empty groups, misplaced `)`, and input with several expressions.
/// - Enforces the nesting and argument-count limits.
pub mod parser;
/// The value module defines runtime values and the kinds they carry.
pub mod value;
