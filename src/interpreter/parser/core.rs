use tracing::debug;

use crate::{
    ast::Tree,
    config::Limits,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::Token,
        value::{core::Symbol, kind::Kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream that must hold exactly one expression.
///
/// # Errors
/// - `EmptyExpression` if there is nothing to evaluate.
/// - `MultipleForms` if more than one top-level expression is present.
/// - Everything [`parse_forms`] reports.
///
/// # Example
/// ```
/// use parencalc::{
///     config::Limits,
///     interpreter::{
///         environment::Environment, lexer::tokenize, parser::core::parse, value::core::Symbol,
///     },
/// };
///
/// let env = Environment::standard();
/// let tokens = tokenize("(+ 2 3)").unwrap();
/// let tree = parse(&tokens, &env, &Limits::default()).unwrap();
///
/// assert_eq!(tree.symbol().as_procedure().unwrap().name(), "+");
/// assert_eq!(tree.children().len(), 2);
/// assert_eq!(tree.children()[0].symbol(), Symbol::Integer(2));
/// ```
pub fn parse(tokens: &[Token], environment: &Environment, limits: &Limits) -> ParseResult<Tree> {
    let mut forms = parse_forms(tokens, environment, limits)?;

    match forms.len() {
        0 => Err(ParseError::EmptyExpression),
        1 => Ok(forms.swap_remove(0)),
        count => Err(ParseError::MultipleForms { count }),
    }
}

/// Parses every top-level expression in a token stream.
///
/// A `(` starts a group parsed by [`parse_group`]; any other value token
/// becomes a leaf form of its own.
///
/// # Errors
/// - `UnexpectedGroupClose` for a `)` outside any group.
/// - Any resolution or syntax error from inside a group.
pub fn parse_forms(tokens: &[Token],
                   environment: &Environment,
                   limits: &Limits)
                   -> ParseResult<Vec<Tree>> {
    let mut tokens = tokens.iter();
    let mut forms = Vec::new();

    while let Some(token) = tokens.next() {
        match token.kind {
            Kind::GroupOpen => forms.push(parse_group(&mut tokens, environment, limits, token, 1)?),
            Kind::GroupClose => {
                return Err(ParseError::UnexpectedGroupClose { column: token.column });
            },
            _ => forms.push(Tree::Leaf(environment.resolve(token)?)),
        }
    }

    Ok(forms)
}

/// Parses one group whose `(` has just been consumed.
///
/// The token after `(` must name a procedure; the group becomes a call to it.
/// Remaining tokens are added as children, left to right, until the matching
/// `)`. Running out of tokens closes the group as well.
///
/// Grammar: `group := "(" procedure (value | group)* ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `open`: The `(` token that started this group.
/// - `depth`: Nesting depth of this group; top-level groups have depth 1.
///
/// # Returns
/// A `Tree::Apply` node calling the head procedure on the children.
fn parse_group<'a, I>(tokens: &mut I,
                      environment: &Environment,
                      limits: &Limits,
                      open: &Token,
                      depth: usize)
                      -> ParseResult<Tree>
    where I: Iterator<Item = &'a Token>
{
    if depth > limits.max_depth {
        return Err(ParseError::NestingTooDeep { limit: limits.max_depth });
    }

    let head = match tokens.next() {
        None => return Err(ParseError::EmptyExpression),
        Some(token) if token.kind == Kind::GroupClose => {
            return Err(ParseError::EmptyExpression);
        },
        Some(token) if token.kind == Kind::Procedure => token,
        Some(token) => {
            return Err(ParseError::ExpectedProcedure { found:  token.text.clone(),
                                                       column: token.column, });
        },
    };

    let procedure = match environment.resolve(head)? {
        Symbol::Procedure(procedure) => procedure,
        _ => {
            return Err(ParseError::NotAProcedure { name:   head.text.clone(),
                                                   column: head.column, });
        },
    };

    let mut children = Vec::new();

    loop {
        let Some(token) = tokens.next() else {
            debug!(procedure = procedure.name(),
                   column = open.column,
                   "input ended inside an open group; closing it");
            break;
        };

        let child = match token.kind {
            Kind::GroupClose => break,
            Kind::GroupOpen => parse_group(tokens, environment, limits, token, depth + 1)?,
            _ => Tree::Leaf(environment.resolve(token)?),
        };

        if children.len() == limits.max_children {
            return Err(ParseError::TooManyChildren { procedure: procedure.name().to_string(),
                                                     limit:     limits.max_children, });
        }
        children.push(child);
    }

    Ok(Tree::Apply { procedure, children })
}
