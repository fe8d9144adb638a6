/// Category tag for tokens, symbols and tree nodes.
///
/// `GroupOpen` and `GroupClose` only ever describe tokens: they are consumed by
/// the parser and never stored in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A base-10, 64-bit signed integer such as `42` or `-7`.
    Integer,
    /// A 64-bit float such as `3.14`.
    Float,
    /// A name in operator position, directly after `(`.
    Procedure,
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// A name in value position, such as `π` in `(* 2.0 π)`.
    Name,
    /// The empty value.
    Nil,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Procedure => "Procedure",
            Self::GroupOpen => "GroupOpen",
            Self::GroupClose => "GroupClose",
            Self::Name => "Name",
            Self::Nil => "Nil",
        };

        f.write_str(name)
    }
}
