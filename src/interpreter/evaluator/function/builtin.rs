use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Symbol},
};

/// Applies a binary numeric operation to two operands of one kind.
///
/// There is no promotion: `Integer` pairs go through `int_op`, `Float` pairs
/// through `float_op`, and any other pairing is a type mismatch. A `None`
/// from `int_op` means the result left the `i64` range.
fn apply_numeric(name: &'static str,
                 left: Symbol,
                 right: Symbol,
                 int_op: fn(i64, i64) -> Option<i64>,
                 float_op: fn(f64, f64) -> f64)
                 -> EvalResult<Symbol> {
    match (left, right) {
        (Symbol::Integer(a), Symbol::Integer(b)) => {
            int_op(a, b).map(Symbol::Integer)
                        .ok_or_else(|| RuntimeError::Overflow { procedure: name.to_string() })
        },
        (Symbol::Float(a), Symbol::Float(b)) => Ok(Symbol::Float(float_op(a, b))),
        _ => Err(RuntimeError::TypeMismatch { procedure: name.to_string(),
                                              left:      left.kind(),
                                              right:     right.kind(), }),
    }
}

/// `(+ a b)`
///
/// # Example
/// ```
/// use parencalc::interpreter::{evaluator::function::builtin::add, value::core::Symbol};
///
/// let sum = add("+", Symbol::Integer(2), Symbol::Integer(3)).unwrap();
/// assert_eq!(sum, Symbol::Integer(5));
///
/// assert!(add("+", Symbol::Integer(2), Symbol::Float(3.0)).is_err());
/// ```
pub fn add(name: &'static str, left: Symbol, right: Symbol) -> EvalResult<Symbol> {
    apply_numeric(name, left, right, i64::checked_add, |a, b| a + b)
}

/// `(- a b)`
pub fn subtract(name: &'static str, left: Symbol, right: Symbol) -> EvalResult<Symbol> {
    apply_numeric(name, left, right, i64::checked_sub, |a, b| a - b)
}

/// `(* a b)`
pub fn multiply(name: &'static str, left: Symbol, right: Symbol) -> EvalResult<Symbol> {
    apply_numeric(name, left, right, i64::checked_mul, |a, b| a * b)
}

/// `(/ a b)`
///
/// Integer division truncates toward zero and fails on a zero divisor. Float
/// division follows IEEE-754, so dividing by `0.0` gives an infinity or NaN.
///
/// # Example
/// ```
/// use parencalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::builtin::divide, value::core::Symbol},
/// };
///
/// let q = divide("/", Symbol::Integer(7), Symbol::Integer(2)).unwrap();
/// assert_eq!(q, Symbol::Integer(3));
///
/// let err = divide("/", Symbol::Integer(1), Symbol::Integer(0)).unwrap_err();
/// assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
///
/// let inf = divide("/", Symbol::Float(1.0), Symbol::Float(0.0)).unwrap();
/// assert_eq!(inf, Symbol::Float(f64::INFINITY));
/// ```
pub fn divide(name: &'static str, left: Symbol, right: Symbol) -> EvalResult<Symbol> {
    if let (Symbol::Integer(_), Symbol::Integer(0)) = (left, right) {
        return Err(RuntimeError::DivisionByZero { procedure: name.to_string() });
    }

    apply_numeric(name, left, right, i64::checked_div, |a, b| a / b)
}
