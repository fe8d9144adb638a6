use tracing::trace;

use crate::{ast::Tree, config::Limits, error::RuntimeError, interpreter::value::core::Symbol};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Tree {
    /// Evaluates the tree with the default [`Limits`].
    ///
    /// Evaluation is eager and strict: every argument of a call is evaluated,
    /// left to right and depth first, before the call itself runs. Nothing is
    /// cached, so evaluating the same tree twice repeats every call.
    ///
    /// # Errors
    /// The first failure encountered, with failures inside arguments wrapped
    /// in `RuntimeError::Argument`.
    ///
    /// # Example
    /// ```
    /// use parencalc::{
    ///     config::Limits,
    ///     interpreter::{environment::Environment, lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let tokens = tokenize("(+ (+ 2 3) 5)").unwrap();
    /// let tree = parse(&tokens, &Environment::standard(), &Limits::default()).unwrap();
    ///
    /// assert_eq!(tree.evaluate().unwrap().as_integer(), Some(10));
    /// ```
    pub fn evaluate(&self) -> EvalResult<Symbol> {
        self.evaluate_with(&Limits::default())
    }

    /// Evaluates the tree, failing with `NestingTooDeep` once calls nest
    /// deeper than `limits.max_depth`.
    pub fn evaluate_with(&self, limits: &Limits) -> EvalResult<Symbol> {
        self.evaluate_at(limits, 1)
    }

    fn evaluate_at(&self, limits: &Limits, depth: usize) -> EvalResult<Symbol> {
        match self {
            Self::Leaf(symbol) => Ok(*symbol),
            Self::Apply { procedure, children } => {
                if depth > limits.max_depth {
                    return Err(RuntimeError::NestingTooDeep { limit: limits.max_depth });
                }

                let mut arguments = Vec::with_capacity(children.len());

                for (index, child) in children.iter().enumerate() {
                    let value = child.evaluate_at(limits, depth + 1)
                                     .map_err(|source| RuntimeError::Argument {
                                         procedure: procedure.name().to_string(),
                                         position:  index + 1,
                                         source:    Box::new(source),
                                     })?;
                    arguments.push(value);
                }

                trace!(procedure = procedure.name(), ?arguments, depth, "applying");
                procedure.call(&arguments)
            },
        }
    }
}
