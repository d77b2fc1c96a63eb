/// The evaluator module reduces postfix terms to a single integer.
///
/// It runs the operand stack, applies operators with checked arithmetic and
/// reports runtime errors such as division by zero or overflow.
///
/// # Responsibilities
/// - Evaluates postfix term sequences.
/// - Implements truncating division, floor division and floor modulo.
/// - Detects operand stack underflow and leftovers.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression and produces number literals and
/// operators. Literals are validated against their declared base while
/// scanning.
///
/// # Responsibilities
/// - Splits the input into literals and operators, skipping whitespace.
/// - Distinguishes `/` from `//`.
/// - Reports malformed literals, bad bases and invalid digits with their
///   position.
pub mod lexer;
/// The parser module turns tokens into postfix order.
///
/// It checks that operands and operators alternate, attaches leading signs to
/// literals, and reorders the terms by operator precedence.
///
/// # Responsibilities
/// - Rejects structurally invalid expressions early.
/// - Implements the shunting-yard reordering.
pub mod parser;
/// The value module defines the evaluator's operand type.
pub mod value;
