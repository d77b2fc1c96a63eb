use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{floor_div, floor_mod, trunc_div},
};

/// Applies a binary operator to two decimal operands.
///
/// `/` truncates toward zero, `//` rounds toward negative infinity and `%`
/// returns the remainder matching `//`, so its sign follows the divisor.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i128>` containing the computed value.
///
/// # Errors
/// - `DivisionByZero` if `op` divides and `right` is zero.
/// - `Overflow` if the result does not fit in an `i128`.
///
/// # Example
/// ```
/// use mixradix::{ast::Operator, interpreter::evaluator::binary::apply_operator};
///
/// assert_eq!(apply_operator(Operator::Div, -7, 2).unwrap(), -3);
/// assert_eq!(apply_operator(Operator::FloorDiv, -7, 2).unwrap(), -4);
/// assert_eq!(apply_operator(Operator::Mod, -7, 2).unwrap(), 1);
/// assert!(apply_operator(Operator::Mod, 1, 0).is_err());
/// ```
pub fn apply_operator(op: Operator, left: i128, right: i128) -> EvalResult<i128> {
    if op.divides() && right == 0 {
        return Err(RuntimeError::DivisionByZero { op });
    }

    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => trunc_div(left, right),
        Operator::FloorDiv => floor_div(left, right),
        Operator::Mod => Some(floor_mod(left, right)),
    };
    result.ok_or(RuntimeError::Overflow { op })
}
