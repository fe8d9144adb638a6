use crate::interpreter::{evaluator::function::core::Procedure, value::kind::Kind};

/// A resolved, typed runtime value.
///
/// Symbols are produced when a token is resolved against the
/// [`Environment`](crate::interpreter::environment::Environment) and when a
/// procedure call returns. The payload always matches the kind reported by
/// [`Symbol::kind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A reference to a builtin procedure.
    Procedure(Procedure),
    /// The empty value. Only ever seen when something inside the interpreter
    /// went wrong.
    Nil,
}

impl Symbol {
    /// Returns the category of this symbol.
    ///
    /// # Example
    /// ```
    /// use parencalc::interpreter::value::{core::Symbol, kind::Kind};
    ///
    /// assert_eq!(Symbol::Integer(3).kind(), Kind::Integer);
    /// assert_eq!(Symbol::Float(0.5).kind(), Kind::Float);
    /// assert_eq!(Symbol::Nil.kind(), Kind::Nil);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Procedure(_) => Kind::Procedure,
            Self::Nil => Kind::Nil,
        }
    }

    /// Returns the integer payload, if this is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the procedure handle, if this symbol names a procedure.
    #[must_use]
    pub const fn as_procedure(&self) -> Option<Procedure> {
        match self {
            Self::Procedure(p) => Some(*p),
            _ => None,
        }
    }
}

/// Renders the symbol the way the REPL prints results.
///
/// Finite floats always carry a decimal point so that printing a result and
/// reading it back yields a float again.
///
/// # Example
/// ```
/// use parencalc::interpreter::value::core::Symbol;
///
/// assert_eq!(Symbol::Integer(-12).to_string(), "-12");
/// assert_eq!(Symbol::Float(5.0).to_string(), "5.0");
/// assert_eq!(Symbol::Float(0.25).to_string(), "0.25");
/// assert_eq!(Symbol::Float(f64::INFINITY).to_string(), "inf");
/// ```
impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => {
                if !r.is_finite() {
                    return write!(f, "{r}");
                }

                let text = r.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            },
            Self::Procedure(p) => write!(f, "#<procedure {}>", p.name()),
            Self::Nil => f.write_str("nil (interpreter bug)"),
        }
    }
}
