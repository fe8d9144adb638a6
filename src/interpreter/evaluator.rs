/// Tree evaluation.
///
/// Walks a parsed tree depth first, evaluating every argument left to right
/// before applying the procedure that owns them.
pub mod core;

/// Builtin procedures.
///
/// Declares the fixed procedure table and the arithmetic implementations
/// behind it.
pub mod function;
