/// Broad class of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The text itself is malformed.
    Lex,
    /// A well-formed token names something that does not exist.
    Resolution,
    /// The tokens do not form a valid expression.
    Syntax,
}

/// Represents all errors that can occur during lexing, resolution or parsing.
///
/// Columns are 1-based character offsets into the input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The first word of a line was neither `(` nor a number.
    #[error("column {column}: an expression must start with \"(\", got \"{word}\"")]
    MustStartWithGroupOpen {
        /// The word found instead.
        word:   String,
        /// Where it starts.
        column: usize,
    },
    /// A numeric-looking word is not a valid number.
    #[error("column {column}: could not convert \"{text}\" to a number: {reason}")]
    NumberFormat {
        /// The literal text.
        text:   String,
        /// Where it starts.
        column: usize,
        /// Why the conversion failed.
        reason: String,
    },
    /// A name in operator position does not name a builtin procedure.
    #[error("column {column}: unknown procedure \"{name}\"")]
    UnknownProcedure {
        /// The procedure name.
        name:   String,
        /// Where it starts.
        column: usize,
    },
    /// A name in value position is not bound to anything.
    #[error("column {column}: unknown name \"{name}\"")]
    UnknownName {
        /// The name.
        name:   String,
        /// Where it starts.
        column: usize,
    },
    /// A token of a kind that never has a value was asked for one.
    #[error("column {column}: cannot determine the value of {kind} token \"{text}\"")]
    UnresolvableToken {
        /// The token's kind, rendered.
        kind:   String,
        /// The token text.
        text:   String,
        /// Where it starts.
        column: usize,
    },
    /// There was nothing to evaluate, e.g. `()` or a blank line.
    #[error("empty expression; expected (procedure args...)")]
    EmptyExpression,
    /// A group did not start with a procedure name, e.g. `(2 3)`.
    #[error("column {column}: expected a procedure name after \"(\", got \"{found}\"")]
    ExpectedProcedure {
        /// The text found in operator position.
        found:  String,
        /// Where it starts.
        column: usize,
    },
    /// A bound name was used in operator position but is not a procedure.
    #[error("column {column}: \"{name}\" is not a procedure")]
    NotAProcedure {
        /// The name.
        name:   String,
        /// Where it starts.
        column: usize,
    },
    /// A `)` appeared with no matching `(`.
    #[error("column {column}: unexpected \")\" with no open group")]
    UnexpectedGroupClose {
        /// Where it appears.
        column: usize,
    },
    /// More than one top-level expression appeared on one line.
    #[error("expected a single expression per line, found {count}")]
    MultipleForms {
        /// Number of top-level expressions found.
        count: usize,
    },
    /// Groups were nested deeper than the configured limit.
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
    /// A single call received more arguments than the configured limit.
    #[error("\"{procedure}\" was given more than {limit} arguments")]
    TooManyChildren {
        /// The procedure receiving the arguments.
        procedure: String,
        /// The configured maximum.
        limit:     usize,
    },
}

impl ParseError {
    /// Returns the broad class of this error.
    ///
    /// # Example
    /// ```
    /// use parencalc::error::{ErrorCategory, ParseError};
    ///
    /// assert_eq!(ParseError::EmptyExpression.category(), ErrorCategory::Syntax);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MustStartWithGroupOpen { .. } | Self::NumberFormat { .. } => ErrorCategory::Lex,
            Self::UnknownProcedure { .. } | Self::UnknownName { .. } => ErrorCategory::Resolution,
            Self::UnresolvableToken { .. }
            | Self::EmptyExpression
            | Self::ExpectedProcedure { .. }
            | Self::NotAProcedure { .. }
            | Self::UnexpectedGroupClose { .. }
            | Self::MultipleForms { .. }
            | Self::NestingTooDeep { .. }
            | Self::TooManyChildren { .. } => ErrorCategory::Syntax,
        }
    }
}
