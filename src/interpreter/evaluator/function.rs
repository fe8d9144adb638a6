/// The builtin arithmetic procedures.
///
/// Each one takes exactly two operands of the same numeric kind.
pub mod builtin;

/// The builtin table and the `Procedure` handle that refers into it.
pub mod core;
