use crate::interpreter::value::kind::Kind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A procedure received the wrong number of arguments.
    #[error("\"{procedure}\" takes {expected} arguments, got: {received}")]
    Arity {
        /// The procedure name.
        procedure: String,
        /// How many arguments it takes.
        expected:  usize,
        /// How many it was given.
        received:  usize,
    },
    /// The operands were not both Integer or both Float.
    #[error("\"{procedure}\" arguments must match and be numeric (Integer or Float); got {left} and {right}")]
    TypeMismatch {
        /// The procedure name.
        procedure: String,
        /// Kind of the first operand.
        left:      Kind,
        /// Kind of the second operand.
        right:     Kind,
    },
    /// Integer division with a zero divisor.
    #[error("\"{procedure}\": integer division by zero")]
    DivisionByZero {
        /// The procedure name.
        procedure: String,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("\"{procedure}\": integer overflow")]
    Overflow {
        /// The procedure name.
        procedure: String,
    },
    /// Evaluating an argument of a call failed.
    #[error("argument {position} of \"{procedure}\": {source}")]
    Argument {
        /// The procedure whose argument failed.
        procedure: String,
        /// 1-based argument position.
        position:  usize,
        /// What went wrong inside the argument.
        source:    Box<RuntimeError>,
    },
    /// Calls were nested deeper than the configured limit.
    #[error("evaluation nesting exceeds the limit of {limit}")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Follows `Argument` wrappers down to the error that started the failure.
    ///
    /// # Example
    /// ```
    /// use parencalc::error::RuntimeError;
    ///
    /// let inner = RuntimeError::Overflow { procedure: "*".to_string() };
    /// let outer = RuntimeError::Argument { procedure: "+".to_string(),
    ///                                      position:  2,
    ///                                      source:    Box::new(inner.clone()), };
    ///
    /// assert_eq!(outer.root_cause(), &inner);
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Argument { source, .. } = current {
            current = source;
        }
        current
    }
}
