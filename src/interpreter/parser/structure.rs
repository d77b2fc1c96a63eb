use crate::{
    ast::{Operator, Term},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Checks operand/operator alternation and attaches leading signs.
///
/// Walks the infix terms with a single flag recording whether a number is
/// expected next. Where a number is expected, one `+` or `-` is accepted and
/// becomes the sign of the following literal, so `-7(10)` and
/// `5(10) * -3(10)` are valid. Whitespace between the sign and its digits is
/// allowed, so `- 7(10)` is the literal `-7(10)`. Anything else out of place is
/// rejected here, before evaluation starts.
///
/// Once its sign is known, each literal is decoded, which fills its value
/// cache and reports an oversized literal with its offset.
///
/// # Parameters
/// - `terms`: Terms in source order, as produced by the lexer.
///
/// # Returns
/// Strictly alternating terms, starting and ending with a number.
///
/// # Errors
/// `StructuralError` if the expression is empty, two numbers are adjacent, an
/// operator (other than a single sign) appears where a number is expected, or
/// the expression ends with an operator.
///
/// `LiteralTooLarge` if a signed literal does not fit in an `i128`.
pub fn check_structure(terms: Vec<Term>) -> ParseResult<Vec<Term>> {
    let mut checked = Vec::with_capacity(terms.len());
    let mut sign: Option<(bool, usize)> = None;
    let mut expect_number = true;
    let mut dangling = 0;

    for term in terms {
        match term {
            Term::Number(literal) if expect_number => {
                let literal = match sign.take() {
                    Some((negative, position)) => literal.with_sign(negative, position),
                    None => literal,
                };
                if let Err(e) = literal.value() {
                    return Err(ParseError::from_conversion(e,
                                                           &literal.to_string(),
                                                           literal.position()));
                }
                checked.push(Term::Number(literal));
                expect_number = false;
            },
            Term::Number(literal) => {
                return Err(ParseError::StructuralError { details:  format!("Missing operator before '{literal}'"),
                                                         position: literal.position(), });
            },
            Term::Operator { op, position } if !expect_number => {
                checked.push(Term::Operator { op, position });
                expect_number = true;
                dangling = position;
            },
            Term::Operator { op: op @ (Operator::Add | Operator::Sub),
                             position, } if sign.is_none() => {
                sign = Some((op == Operator::Sub, position));
                dangling = position;
            },
            Term::Operator { op, position } => {
                return Err(ParseError::StructuralError { details: format!("Expected a number but found operator '{op}'"),
                                                         position });
            },
        }
    }

    if checked.is_empty() && sign.is_none() {
        return Err(ParseError::StructuralError { details:  "Expression is empty".to_string(),
                                                 position: 0, });
    }
    if expect_number {
        return Err(ParseError::StructuralError { details:  "Expression ends with an operator".to_string(),
                                                 position: dangling, });
    }

    Ok(checked)
}
