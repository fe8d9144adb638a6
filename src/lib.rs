//! # parencalc
//!
//! parencalc is a small interpreter for parenthesized arithmetic expressions
//! such as `(+ (* 2 3) 4)`. A line is tokenized, parsed into a tree whose
//! shape follows the parentheses, and evaluated to a single value.
//!
//! Integers and floats never mix: `(+ 1 2.0)` is a type error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::Limits,
    interpreter::{
        environment::Environment, lexer::tokenize, parser::core::parse, value::core::Symbol,
    },
};

/// Defines the structure of parsed code.
///
/// Declares the `Tree` enum: call nodes that own their arguments, and leaves
/// that hold a literal or constant. Trees are built by the parser and walked
/// by the evaluator.
pub mod ast;
/// Interpreter limits.
///
/// Holds the nesting and argument-count limits that keep parsing and
/// evaluation from recursing without bound.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, resolution, parser,
///   evaluator).
/// - Attaches columns and names to errors for user feedback.
/// - Preserves the underlying cause when an argument of a call fails.
pub mod error;
/// Orchestrates the whole process of turning a line into a value.
///
/// Ties together the environment, lexer, parser, evaluator and value types.
pub mod interpreter;

pub use error::Error;

/// Interprets one line of input.
///
/// The line is tokenized, parsed into a single tree against `environment`, and
/// evaluated. The token list and tree are emitted at `debug` level for anyone
/// watching the logs; the result does not depend on it.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error encountered.
///
/// # Examples
/// ```
/// use parencalc::{config::Limits, interpret, interpreter::environment::Environment};
///
/// let env = Environment::standard();
/// let limits = Limits::default();
///
/// let value = interpret("(* billion 2)", &env, &limits).unwrap();
/// assert_eq!(value.to_string(), "2000000000");
///
/// assert!(interpret("(+ 1 2.5)", &env, &limits).is_err());
/// ```
pub fn interpret(source: &str, environment: &Environment, limits: &Limits) -> Result<Symbol, Error> {
    let tokens = tokenize(source)?;
    debug!(tokens = %DisplayList(&tokens), "tokenized");

    let tree = parse(&tokens, environment, limits)?;
    debug!(%tree, "parsed");

    let value = tree.evaluate_with(limits)?;
    debug!(%value, "evaluated");

    Ok(value)
}

/// Interprets one line with the standard environment and default limits.
///
/// # Errors
/// Same as [`interpret`].
///
/// # Examples
/// ```
/// use parencalc::evaluate;
///
/// assert_eq!(evaluate("(- 10 4)").unwrap().as_integer(), Some(6));
/// ```
pub fn evaluate(source: &str) -> Result<Symbol, Error> {
    interpret(source, &Environment::standard(), &Limits::default())
}

/// Formats a slice as `[a, b, c]` using each element's `Display`.
struct DisplayList<'a, T>(&'a [T]);

impl<T: std::fmt::Display> std::fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{item}")?;
        }

        write!(f, "]")
    }
}
