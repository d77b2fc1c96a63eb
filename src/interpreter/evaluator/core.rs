use tracing::trace;

use crate::{
    ast::Term,
    error::RuntimeError,
    interpreter::{evaluator::binary::apply_operator, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix term sequence.
///
/// Numbers are pushed onto an operand stack. An operator pops the right
/// operand, then the left one, applies itself and pushes the result. The
/// sequence must reduce to exactly one value.
///
/// This function accepts any sequence, not only the output of the parser, and
/// reports stack underflow and leftovers as errors.
///
/// # Parameters
/// - `terms`: Terms in postfix order.
///
/// # Returns
/// The decimal value of the expression.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds fewer than two operands.
/// - `MalformedExpression` if the final stack does not hold exactly one value.
/// - `DivisionByZero` or `Overflow` from the arithmetic.
/// - `Conversion` if a literal does not fit in an `i128`.
///
/// # Example
/// ```
/// use mixradix::interpreter::{evaluator::core::eval_postfix, parser::core::parse_expression};
///
/// let postfix = parse_expression("1010(2) + F(16)").unwrap();
/// assert_eq!(eval_postfix(&postfix).unwrap(), 25);
/// ```
pub fn eval_postfix(terms: &[Term]) -> EvalResult<i128> {
    let mut stack: Vec<Value<'_>> = Vec::with_capacity(terms.len() / 2 + 1);

    for term in terms {
        match term {
            Term::Number(literal) => stack.push(Value::Literal(literal)),
            Term::Operator { op, .. } => {
                let found = stack.len();
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::InsufficientOperands { op: *op,
                                                                    found });
                };
                let result = apply_operator(*op, left.decimal()?, right.decimal()?)?;
                trace!(%left, %op, %right, result = %result, "applied operator");
                stack.push(Value::Decimal(result));
            },
        }
    }

    match stack.as_slice() {
        [value] => value.decimal(),
        rest => Err(RuntimeError::MalformedExpression { remaining: rest.len() }),
    }
}
