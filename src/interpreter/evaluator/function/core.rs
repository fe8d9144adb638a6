use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::builtin},
        value::core::Symbol,
    },
};

/// Signature shared by every builtin.
///
/// A builtin receives its registered name (for error messages) and its two
/// already-evaluated operands.
type BuiltinFn = fn(&'static str, Symbol, Symbol) -> EvalResult<Symbol>;

/// Number of arguments every builtin takes.
pub const BUILTIN_ARITY: usize = 2;

/// Defines builtin procedures by generating a lookup table and a name list.
///
/// Each entry provides a name and the function pointer implementing it.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_PROCEDURES` (public list of builtin names).
macro_rules! builtin_procedures {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin procedure, in registration order.
        pub const BUILTIN_PROCEDURES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_procedures! {
    "+" => builtin::add,
    "-" => builtin::subtract,
    "*" => builtin::multiply,
    "/" => builtin::divide,
}

/// A handle to one builtin procedure.
///
/// Handles point into a static table, so copying one never copies the
/// procedure itself and two handles compare equal exactly when they refer to
/// the same table entry.
#[derive(Clone, Copy)]
pub struct Procedure {
    def: &'static BuiltinDef,
}

impl Procedure {
    /// Finds a builtin by name.
    ///
    /// # Example
    /// ```
    /// use parencalc::interpreter::evaluator::function::core::Procedure;
    ///
    /// let plus = Procedure::lookup("+").unwrap();
    /// assert_eq!(plus.name(), "+");
    /// assert!(plus.same_binding(Procedure::lookup("+").unwrap()));
    /// assert!(Procedure::lookup("pow").is_none());
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTIN_TABLE.iter().find(|b| b.name == name).map(|def| Self { def })
    }

    /// Iterates over every builtin, in registration order.
    pub fn builtins() -> impl Iterator<Item = Self> {
        BUILTIN_TABLE.iter().map(|def| Self { def })
    }

    /// The name the procedure is registered under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.def.name
    }

    /// Returns `true` if both handles refer to the same builtin.
    #[must_use]
    pub fn same_binding(self, other: Self) -> bool {
        std::ptr::eq(self.def, other.def)
    }

    /// Invokes the procedure on already-evaluated arguments.
    ///
    /// The argument count is checked before the builtin sees any operand, so
    /// an arity error wins over a type error.
    ///
    /// # Errors
    /// - `Arity` unless exactly [`BUILTIN_ARITY`] arguments are given.
    /// - Whatever the builtin itself reports.
    pub fn call(self, args: &[Symbol]) -> EvalResult<Symbol> {
        let [left, right] = *args else {
            return Err(RuntimeError::Arity { procedure: self.def.name.to_string(),
                                             expected:  BUILTIN_ARITY,
                                             received:  args.len(), });
        };

        (self.def.func)(self.def.name, left, right)
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        self.same_binding(*other)
    }
}

impl std::fmt::Debug for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Procedure").field(&self.def.name).finish()
    }
}
