use tracing::debug;

use crate::{
    ast::Term,
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{
            postfix::{render_postfix, to_postfix},
            structure::check_structure,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression into postfix order.
///
/// This is the entry point for parsing. The source is tokenized (validating
/// every literal), checked for operand/operator alternation, then reordered by
/// precedence.
///
/// Grammar: `expression := number (operator number)*`, where
/// `number := [sign] digits "(" base ")"`.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The terms of the expression in postfix order.
///
/// # Example
/// ```
/// use mixradix::interpreter::parser::{core::parse_expression, postfix::render_postfix};
///
/// let postfix = parse_expression("2(10) + 3(10) * 4(10)").unwrap();
/// assert_eq!(render_postfix(&postfix), "2(10) 3(10) 4(10) * +");
/// ```
pub fn parse_expression(source: &str) -> ParseResult<Vec<Term>> {
    let terms = tokenize(source)?;
    let terms = check_structure(terms)?;
    let postfix = to_postfix(terms);

    debug!(postfix = %render_postfix(&postfix), "reordered expression");
    Ok(postfix)
}
