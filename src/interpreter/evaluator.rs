/// Binary operator arithmetic.
///
/// Applies one operator to two decimal operands with overflow checks and the
/// calculator's division conventions.
pub mod binary;
/// Postfix evaluation.
///
/// Reduces a postfix term sequence with an operand stack and defines the
/// `EvalResult` alias.
pub mod core;
