/// Default maximum number of nested groups in one expression.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default maximum number of arguments a single call may receive.
pub const DEFAULT_MAX_CHILDREN: usize = 32;

/// Resource limits applied while parsing and evaluating.
///
/// Both the parser and the evaluator recurse once per nested group, so the
/// depth limit is what keeps hostile input from exhausting the stack.
///
/// # Example
/// ```
/// use parencalc::config::Limits;
///
/// let limits = Limits::default().with_max_depth(8);
/// assert_eq!(limits.max_depth, 8);
/// assert_eq!(limits.max_children, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest permitted nesting of groups; `(+ 1 2)` has depth 1.
    pub max_depth:    usize,
    /// Most children any one call node may hold.
    pub max_children: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth:    DEFAULT_MAX_DEPTH,
               max_children: DEFAULT_MAX_CHILDREN, }
    }
}

impl Limits {
    /// Returns a copy with a different depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy with a different per-call argument limit.
    #[must_use]
    pub const fn with_max_children(mut self, max_children: usize) -> Self {
        self.max_children = max_children;
        self
    }
}
