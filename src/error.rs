/// Lexing, resolution and parsing errors.
///
/// Everything that can go wrong before evaluation starts: a line that does not
/// open with `(`, a malformed number, an unknown name, or a token stream that
/// does not form exactly one well-shaped expression.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while evaluating a tree: wrong argument counts, mismatched operand
/// types, integer division by zero or overflow, and runaway nesting.
pub mod runtime_error;

pub use parse_error::{ErrorCategory, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure produced while interpreting a single line.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
