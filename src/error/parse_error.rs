use crate::error::{ConversionError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or structural checking.
///
/// Every variant carries the byte offset in the expression where the
/// offending text starts.
pub enum ParseError {
    /// A literal declared a base outside `2..=36`.
    InvalidBase {
        /// The declared base.
        base:     i64,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A literal contains a character that is not a digit of its base.
    InvalidDigit {
        /// The offending character.
        digit:    char,
        /// The declared base.
        base:     u32,
        /// The literal the digit belongs to.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A literal has no digits in front of its base annotation.
    EmptyOperand {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A literal is missing a delimiter or its base is not an integer.
    MalformedLiteral {
        /// The literal text.
        literal:  String,
        /// What is wrong with it.
        reason:   String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// Operands and operators do not alternate.
    StructuralError {
        /// Details about the misplaced token.
        details:  String,
        /// Byte offset of the misplaced token.
        position: usize,
    },
    /// Found text the lexer could not classify.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A literal value was too large to be represented.
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Attaches a literal and its position to a conversion failure.
    #[must_use]
    pub fn from_conversion(error: ConversionError, literal: &str, position: usize) -> Self {
        let literal = literal.to_string();
        match error {
            ConversionError::InvalidBase { base } => Self::InvalidBase { base, position },
            ConversionError::InvalidDigit { digit, base } => Self::InvalidDigit { digit,
                                                                                  base,
                                                                                  literal,
                                                                                  position },
            ConversionError::EmptyOperand { .. } => Self::EmptyOperand { literal, position },
            ConversionError::Overflow { .. } => Self::LiteralTooLarge { literal, position },
        }
    }

    /// Returns the flat class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase { .. } => ErrorKind::InvalidBase,
            Self::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            Self::EmptyOperand { .. } => ErrorKind::EmptyOperand,
            Self::MalformedLiteral { .. } => ErrorKind::MalformedLiteral,
            Self::StructuralError { .. } => ErrorKind::StructuralError,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::LiteralTooLarge { .. } => ErrorKind::Overflow,
        }
    }

    /// Byte offset in the expression where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidBase { position, .. }
            | Self::InvalidDigit { position, .. }
            | Self::EmptyOperand { position, .. }
            | Self::MalformedLiteral { position, .. }
            | Self::StructuralError { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBase { base, position } => write!(f,
                                                           "Error at offset {position}: Base {base} is out of range, expected 2 to 36."),

            Self::InvalidDigit { digit,
                                 base,
                                 literal,
                                 position, } => write!(f,
                                                       "Error at offset {position}: '{digit}' in '{literal}' is not a valid digit in base {base}."),

            Self::EmptyOperand { literal, position } => {
                write!(f, "Error at offset {position}: Number '{literal}' has no digits.")
            },

            Self::MalformedLiteral { literal,
                                     reason,
                                     position, } => {
                write!(f, "Error at offset {position}: Malformed number '{literal}': {reason}.")
            },

            Self::StructuralError { details, position } => {
                write!(f, "Error at offset {position}: {details}.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at offset {position}: Number '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
