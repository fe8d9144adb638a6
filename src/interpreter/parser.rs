/// Core parsing entry points.
///
/// Builds trees from the token stream by recursive descent, one call per
/// parenthesized group.
pub mod core;
