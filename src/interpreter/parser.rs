/// Entry point of the parsing phase.
///
/// Chains the lexer, the structural check and the postfix reordering, and
/// defines the `ParseResult` alias shared by all parsing code.
pub mod core;
/// Operator-precedence reordering.
///
/// Implements the shunting-yard algorithm for the two precedence levels of the
/// calculator, turning an infix term sequence into postfix order.
pub mod postfix;
/// Operand/operator alternation.
///
/// Checks that numbers and operators alternate, that the expression neither
/// starts nor ends with a binary operator, and folds a leading `+` or `-` into
/// the number that follows it.
pub mod structure;
