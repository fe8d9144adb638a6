/// The closed set of categories shared by tokens, symbols and tree nodes.
///
/// Tokens use every variant; runtime values only ever carry `Integer`,
/// `Float`, `Procedure` or `Nil`.
pub mod kind;

/// Runtime values.
///
/// Declares the `Symbol` enum produced by resolution and evaluation, together
/// with its textual rendering.
pub mod core;
