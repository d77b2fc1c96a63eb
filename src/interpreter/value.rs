use crate::{ast::NumberLiteral, interpreter::evaluator::core::EvalResult};

/// An entry of the evaluator's operand stack.
///
/// Literals are pushed as borrowed references and decoded only when an
/// operator consumes them; the literal caches its own decimal value. Operator
/// results are pushed as synthetic decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// A number literal from the expression.
    Literal(&'a NumberLiteral),
    /// An intermediate result.
    Decimal(i128),
}

impl Value<'_> {
    /// Returns the decimal value, decoding a literal on first use.
    ///
    /// # Errors
    /// Returns `RuntimeError::Conversion` if a literal does not fit in an
    /// `i128`.
    pub fn decimal(&self) -> EvalResult<i128> {
        match self {
            Self::Literal(literal) => Ok(literal.value()?),
            Self::Decimal(value) => Ok(*value),
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}
