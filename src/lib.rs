//! # mixradix
//!
//! mixradix is a mixed-radix arithmetic calculator written in Rust.
//! Every operand carries its own base, written as `digits(base)`, and the
//! result is rendered in whichever base the caller asks for.
//!
//! ```
//! use mixradix::evaluate;
//!
//! // Binary 1010 plus hexadecimal F, shown in decimal.
//! assert_eq!(evaluate("1010(2) + F(16)", 10).unwrap(), "25");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::eval_postfix,
        parser::{core::parse_expression, postfix::render_postfix},
    },
    radix::{Base, format_from_decimal},
};

/// Defines the terms an expression is made of.
///
/// This module declares the `Operator`, `NumberLiteral` and `Term` types that
/// flow from the lexer through the parser into the evaluator.
///
/// # Responsibilities
/// - Fixes operator precedence and spelling.
/// - Keeps number literals immutable and validated, with a cached decimal
///   value.
/// - Attaches source positions for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while converting,
/// tokenizing, checking or evaluating an expression, plus a flat
/// `ErrorKind` for front ends.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (conversion, parser,
///   evaluator).
/// - Attaches byte offsets, bases and operators for context.
/// - Implements the standard error traits.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the structural check, the precedence reordering and
///   the postfix evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Numeral bases, the digit codec and radix conversion.
///
/// # Responsibilities
/// - Validates bases once, through the `Base` type.
/// - Maps characters to digit values and back.
/// - Converts signed digit strings to integers and integers to minimal digit
///   strings.
pub mod radix;
/// General utilities for checked integer arithmetic.
pub mod util;

/// Output base used when the caller does not pick one.
pub const DEFAULT_OUTPUT_BASE: i64 = 10;

/// Evaluates an expression and renders the result in `output_base`.
///
/// Operands are written `[sign]digits(base)` with `base` between 2 and 36;
/// the operators are `+ - * / // %`. Whitespace between tokens is ignored.
/// `*`, `/`, `//` and `%` bind tighter than `+` and `-`, and all operators are
/// left-associative. `/` truncates toward zero, `//` rounds toward negative
/// infinity and `%` takes the sign of its right operand.
///
/// The output base is checked before the expression is looked at. Evaluation
/// is all-or-nothing and keeps no state between calls.
///
/// # Errors
/// Returns a parse error for malformed input and a runtime error for invalid
/// output bases, division by zero or overflow. See [`error::ErrorKind`].
///
/// # Examples
/// ```
/// use mixradix::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2(10) + 3(10) * 4(10)", 10).unwrap(), "14");
/// assert_eq!(evaluate("-7(10) // 2(10)", 10).unwrap(), "-4");
/// assert_eq!(evaluate("FF(16)", 2).unwrap(), "11111111");
///
/// let err = evaluate("5(10) / 0(10)", 10).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expression: &str, output_base: i64) -> Result<String, Error> {
    let base = Base::new(output_base).map_err(RuntimeError::from)?;
    let value = evaluate_to_decimal(expression)?;
    let rendered = format_from_decimal(value, base);

    debug!(%expression, %base, %rendered, "evaluated expression");
    Ok(rendered)
}

/// Evaluates an expression to its decimal value without rendering it.
///
/// # Errors
/// Same as [`evaluate`], minus the output base check.
///
/// # Examples
/// ```
/// use mixradix::evaluate_to_decimal;
///
/// assert_eq!(evaluate_to_decimal("-7(10) % 2(10)").unwrap(), 1);
/// ```
pub fn evaluate_to_decimal(expression: &str) -> Result<i128, Error> {
    let postfix = parse_expression(expression)?;
    Ok(eval_postfix(&postfix)?)
}

/// Returns the expression reordered into postfix order, space separated.
///
/// Signs stay attached to their literals, so the output can be read back as a
/// Reverse Polish sequence.
///
/// # Errors
/// Returns the parse error if the expression is malformed.
///
/// # Examples
/// ```
/// use mixradix::to_postfix_string;
///
/// assert_eq!(to_postfix_string("1(10) - 2(10) * -3(10)").unwrap(),
///            "1(10) 2(10) -3(10) * -");
/// ```
pub fn to_postfix_string(expression: &str) -> Result<String, Error> {
    let postfix = parse_expression(expression)?;
    Ok(render_postfix(&postfix))
}
