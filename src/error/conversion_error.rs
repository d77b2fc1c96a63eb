use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting between digit strings
/// and integers.
pub enum ConversionError {
    /// The base lies outside `2..=36`.
    InvalidBase {
        /// The rejected base.
        base: i64,
    },
    /// A character is not a digit of the base.
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base it was checked against.
        base:  u32,
    },
    /// The text holds no digits after its optional sign.
    EmptyOperand {
        /// The text that was being converted.
        text: String,
    },
    /// The value does not fit in an `i128`.
    Overflow {
        /// The text that was being converted.
        text: String,
    },
}

impl ConversionError {
    /// Returns the flat class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase { .. } => ErrorKind::InvalidBase,
            Self::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            Self::EmptyOperand { .. } => ErrorKind::EmptyOperand,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBase { base } => {
                write!(f, "Base {base} is out of range, expected 2 to 36.")
            },
            Self::InvalidDigit { digit, base } => {
                write!(f, "'{digit}' is not a valid digit in base {base}.")
            },
            Self::EmptyOperand { text } => write!(f, "Number '{text}' has no digits."),
            Self::Overflow { text } => write!(f, "Number '{text}' is too large."),
        }
    }
}

impl std::error::Error for ConversionError {}
