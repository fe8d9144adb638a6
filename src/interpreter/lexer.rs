use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{parser::core::ParseResult, value::kind::Kind},
};

/// Raw lexemes recognised by logos.
///
/// A line is cut into parentheses and whitespace-delimited words; deciding
/// what a word means needs its neighbours and happens in [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
    /// Any run of characters that are neither whitespace nor parentheses.
    #[regex(r"[^\s()]+")]
    Word,
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the word is.
    pub kind:   Kind,
    /// The word exactly as written.
    pub text:   String,
    /// 1-based character column where the word starts.
    pub column: usize,
}

impl Token {
    /// Builds a token at column 1, mostly useful in tests.
    #[must_use]
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into(),
               column: 1 }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.kind, self.text)
    }
}

/// Tokenizes one line of input.
///
/// Every parenthesis becomes its own token and the remaining text is split on
/// Unicode whitespace, so a no-break space separates words like a plain space
/// does. Words are then classified left to right:
///
/// 1. `(` is `GroupOpen`, `)` is `GroupClose`.
/// 2. A word starting with a digit, or with `+`/`-` followed by a digit, is a
///    `Float` when it contains `.` and an `Integer` otherwise. Whether it
///    really is a number is checked later, at resolution.
/// 3. Any other word directly after `(` is a `Procedure` name; elsewhere it is
///    a value `Name`. Such a word may not open the line.
///
/// # Errors
/// `MustStartWithGroupOpen` if the first word is a plain name.
///
/// # Example
/// ```
/// use parencalc::interpreter::{lexer::tokenize, value::kind::Kind};
///
/// let tokens = tokenize("(+ 2 3.5)").unwrap();
/// let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [Kind::GroupOpen, Kind::Procedure, Kind::Integer, Kind::Float, Kind::GroupClose]);
/// ```
pub fn tokenize(line: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        let column = column_at(line, lexer.span().start);

        let kind = match lexeme {
            Ok(Lexeme::Open) => Kind::GroupOpen,
            Ok(Lexeme::Close) => Kind::GroupClose,
            // Every non-space character outside a parenthesis belongs to a word.
            Ok(Lexeme::Word) | Err(()) => classify_word(text, tokens.last(), column)?,
        };

        trace!(%kind, text, column, "token");
        tokens.push(Token { kind,
                            text: text.to_string(),
                            column });
    }

    Ok(tokens)
}

/// Decides the kind of a word that is not a parenthesis.
fn classify_word(word: &str, previous: Option<&Token>, column: usize) -> ParseResult<Kind> {
    if looks_numeric(word) {
        return Ok(if word.contains('.') {
                      Kind::Float
                  } else {
                      Kind::Integer
                  });
    }

    match previous {
        None => Err(ParseError::MustStartWithGroupOpen { word: word.to_string(),
                                                         column }),
        Some(token) if token.kind == Kind::GroupOpen => Ok(Kind::Procedure),
        Some(_) => Ok(Kind::Name),
    }
}

/// A word looks numeric when it starts with a digit, or with a sign that is
/// immediately followed by a digit.
fn looks_numeric(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Converts a byte offset into a 1-based character column.
fn column_at(line: &str, offset: usize) -> usize {
    line.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1
}
