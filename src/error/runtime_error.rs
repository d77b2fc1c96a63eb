use crate::{
    ast::Operator,
    error::{ConversionError, ErrorKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and rendering.
pub enum RuntimeError {
    /// The requested output base lies outside `2..=36`.
    InvalidBase {
        /// The rejected base.
        base: i64,
    },
    /// The right operand of `/`, `//` or `%` was zero.
    DivisionByZero {
        /// The dividing operator.
        op: Operator,
    },
    /// An operator was reached with fewer than two operands on the stack.
    InsufficientOperands {
        /// The starved operator.
        op:    Operator,
        /// How many operands were available.
        found: usize,
    },
    /// The operand stack did not end with exactly one value.
    MalformedExpression {
        /// The number of values left on the stack.
        remaining: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The overflowing operator.
        op: Operator,
    },
    /// A literal could not be decoded.
    Conversion {
        /// The underlying failure.
        error: ConversionError,
    },
}

impl RuntimeError {
    /// Returns the flat class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase { .. } => ErrorKind::InvalidBase,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::Conversion { error } => error.kind(),
        }
    }
}

impl From<ConversionError> for RuntimeError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::InvalidBase { base } => Self::InvalidBase { base },
            error => Self::Conversion { error },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBase { base } => {
                write!(f, "Output base {base} is out of range, expected 2 to 36.")
            },
            Self::DivisionByZero { op } => write!(f, "Division by zero in '{op}'."),
            Self::InsufficientOperands { op, found } => write!(f,
                                                               "Operator '{op}' needs two operands but found {found}."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Malformed expression: {remaining} values left after evaluation, expected 1."),
            Self::Overflow { op } => write!(f,
                                            "Integer overflow while computing '{op}'."),
            Self::Conversion { error } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion { error } => Some(error),
            _ => None,
        }
    }
}
