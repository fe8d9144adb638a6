use std::collections::HashMap;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::function::core::Procedure,
        lexer::Token,
        parser::core::ParseResult,
        value::{core::Symbol, kind::Kind},
    },
};

/// Name under which π is registered.
pub const PI_NAME: &str = "π";
/// Name under which one billion is registered.
pub const BILLION_NAME: &str = "billion";
/// Value of the `billion` constant.
pub const BILLION: i64 = 1_000_000_000;

/// The table of known names.
///
/// An environment is built once, before any input is read, and is never
/// modified afterwards. It is shared by reference with the parser, so a failed
/// line can never leave anything behind for the next one.
#[derive(Debug, Clone)]
pub struct Environment {
    symbols: HashMap<String, Symbol>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::standard()
    }
}

impl Environment {
    /// Builds the standard environment: every builtin procedure plus the
    /// constants `π` and `billion`.
    #[must_use]
    pub fn standard() -> Self {
        let mut symbols: HashMap<String, Symbol> =
            Procedure::builtins().map(|p| (p.name().to_string(), Symbol::Procedure(p)))
                                 .collect();

        symbols.insert(PI_NAME.to_string(), Symbol::Float(std::f64::consts::PI));
        symbols.insert(BILLION_NAME.to_string(), Symbol::Integer(BILLION));

        Self { symbols }
    }

    /// Looks up a registered name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).copied()
    }

    /// Returns every registered name in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.symbols.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Turns a token into a symbol.
    ///
    /// A registered name resolves to its table entry unchanged. Anything else
    /// is converted from its literal text according to the token's kind.
    ///
    /// # Errors
    /// - `NumberFormat` for a numeric-looking word that does not parse.
    /// - `UnknownProcedure` for an operator name with no builtin.
    /// - `UnknownName` for an unbound value name.
    /// - `UnresolvableToken` for parentheses and other valueless tokens.
    ///
    /// # Example
    /// ```
    /// use parencalc::interpreter::{
    ///     environment::Environment,
    ///     lexer::Token,
    ///     value::{core::Symbol, kind::Kind},
    /// };
    ///
    /// let env = Environment::standard();
    ///
    /// let n = env.resolve(&Token::new(Kind::Integer, "-17")).unwrap();
    /// assert_eq!(n, Symbol::Integer(-17));
    ///
    /// let billion = env.resolve(&Token::new(Kind::Name, "billion")).unwrap();
    /// assert_eq!(billion, Symbol::Integer(1_000_000_000));
    ///
    /// assert!(env.resolve(&Token::new(Kind::Procedure, "pow")).is_err());
    /// ```
    pub fn resolve(&self, token: &Token) -> ParseResult<Symbol> {
        if let Some(symbol) = self.get(&token.text) {
            return Ok(symbol);
        }

        let text = token.text.as_str();
        let column = token.column;

        match token.kind {
            Kind::Integer => {
                text.parse::<i64>()
                    .map(Symbol::Integer)
                    .map_err(|e| ParseError::NumberFormat { text: text.to_string(),
                                                            column,
                                                            reason: e.to_string() })
            },
            Kind::Float => {
                text.parse::<f64>()
                    .map(Symbol::Float)
                    .map_err(|e| ParseError::NumberFormat { text: text.to_string(),
                                                            column,
                                                            reason: e.to_string() })
            },
            Kind::Procedure => {
                Procedure::lookup(text).map(Symbol::Procedure)
                                       .ok_or_else(|| ParseError::UnknownProcedure { name: text.to_string(),
                                                                                     column })
            },
            Kind::Name => Err(ParseError::UnknownName { name: text.to_string(),
                                                        column }),
            Kind::GroupOpen | Kind::GroupClose | Kind::Nil => {
                Err(ParseError::UnresolvableToken { kind: token.kind.to_string(),
                                                    text: text.to_string(),
                                                    column })
            },
        }
    }
}
