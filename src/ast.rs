use crate::interpreter::{
    evaluator::function::core::Procedure,
    value::{core::Symbol, kind::Kind},
};

/// A node of the parsed program.
///
/// ```text
///     (+ (+ 2 3) 5)
///
///             +
///           /   \
///          +     5
///        /   \
///       2     3
/// ```
///
/// The variant fixes how the node evaluates: an `Apply` node calls its
/// procedure on its evaluated children, a `Leaf` evaluates to its own symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// A procedure call, `(name child...)`.
    Apply {
        /// The procedure in operator position.
        procedure: Procedure,
        /// The arguments, in the order they were written.
        children:  Vec<Self>,
    },
    /// A literal or a bound constant.
    Leaf(Symbol),
}

impl Tree {
    /// The symbol stored at this node. For a call this is its procedure.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        match self {
            Self::Apply { procedure, .. } => Symbol::Procedure(*procedure),
            Self::Leaf(symbol) => *symbol,
        }
    }

    /// The kind of [`Tree::symbol`].
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.symbol().kind()
    }

    /// The children of this node; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Apply { children, .. } => children,
            Self::Leaf(_) => &[],
        }
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Number of nested calls from this node down to its deepest leaf.
    ///
    /// A leaf has depth 0 and `(+ 1 2)` has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Apply { children, .. } => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
            Self::Leaf(_) => 0,
        }
    }
}

/// Renders the tree back to S-expression text.
///
/// # Example
/// ```
/// use parencalc::{
///     ast::Tree,
///     interpreter::{evaluator::function::core::Procedure, value::core::Symbol},
/// };
///
/// let plus = Procedure::lookup("+").unwrap();
/// let tree = Tree::Apply { procedure: plus,
///                          children:  vec![Tree::Leaf(Symbol::Integer(2)),
///                                          Tree::Leaf(Symbol::Float(0.5))], };
///
/// assert_eq!(tree.to_string(), "(+ 2 0.5)");
/// ```
impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apply { procedure, children } => {
                write!(f, "({}", procedure.name())?;

                for child in children {
                    write!(f, " {child}")?;
                }

                write!(f, ")")
            },
            Self::Leaf(Symbol::Procedure(p)) => f.write_str(p.name()),
            Self::Leaf(symbol) => write!(f, "{symbol}"),
        }
    }
}
