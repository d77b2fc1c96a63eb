/// Base conversion errors.
///
/// Defines the failures raised by the radix layer on its own, before any
/// source position is known: bases out of range, digits that do not belong to
/// a base, empty digit runs and values too wide for the integer type.
pub mod conversion_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and structural
/// checking of an expression. Parse errors include malformed literals, invalid
/// digits, bad bases and operators out of place.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing the postfix
/// sequence: division by zero, overflow, a malformed operand stack or an
/// output base out of range.
pub mod runtime_error;

pub use conversion_error::ConversionError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The class of a failure, independent of the phase that raised it.
///
/// Front ends match on this to pick a message template without caring whether
/// the lexer or the evaluator noticed the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A base outside `2..=36`.
    InvalidBase,
    /// A character that is not a digit of its declared base.
    InvalidDigit,
    /// A literal without any digits.
    EmptyOperand,
    /// A literal missing `(`, `)` or an integer base specifier.
    MalformedLiteral,
    /// Operators and operands do not alternate.
    StructuralError,
    /// The lexer produced something it could not classify.
    UnexpectedToken,
    /// Division, floor division or modulo by zero.
    DivisionByZero,
    /// An operator found fewer than two operands.
    InsufficientOperands,
    /// The operand stack did not reduce to exactly one value.
    MalformedExpression,
    /// A value does not fit in an `i128`.
    Overflow,
}

/// Any failure of a calculate-and-render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised while tokenizing or checking the structure of the expression.
    Parse(ParseError),
    /// Raised while evaluating or rendering.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the flat class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
