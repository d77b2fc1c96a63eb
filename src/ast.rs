use std::cell::OnceCell;

use crate::{
    error::ConversionError,
    radix::{Base, convert::validate_digits, parse_to_decimal},
};

/// A binary arithmetic operator.
///
/// All operators are left-associative. `+` and `-` bind weaker than the four
/// multiplicative operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division truncated toward zero (`/`).
    Div,
    /// Division rounded toward negative infinity (`//`).
    FloorDiv,
    /// Remainder with the sign of the divisor (`%`).
    Mod,
}

impl Operator {
    /// Binding strength: 1 for additive, 2 for multiplicative operators.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::FloorDiv | Self::Mod => 2,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
        }
    }

    /// Whether the right operand must be checked against zero.
    #[must_use]
    pub const fn divides(self) -> bool {
        matches!(self, Self::Div | Self::FloorDiv | Self::Mod)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A number written as `[sign]digits(base)`.
///
/// The digits are validated against the base on construction and never change
/// afterwards. The decimal value is decoded the first time it is asked for and
/// cached.
#[derive(Debug, Clone)]
pub struct NumberLiteral {
    digits:   String,
    negative: bool,
    base:     Base,
    position: usize,
    value:    OnceCell<i128>,
}

impl NumberLiteral {
    /// Builds an unsigned literal.
    ///
    /// # Parameters
    /// - `digits`: The digit run, without sign or base annotation.
    /// - `base`: The declared base.
    /// - `position`: Byte offset of the literal in the expression.
    ///
    /// # Errors
    /// - `EmptyOperand` if `digits` is empty.
    /// - `InvalidDigit` if a character is not a digit of `base`.
    ///
    /// # Example
    /// ```
    /// use mixradix::{ast::NumberLiteral, radix::Base};
    ///
    /// let literal = NumberLiteral::new("1f", Base::new(16).unwrap(), 0).unwrap();
    /// assert_eq!(literal.value(), Ok(31));
    /// assert_eq!(literal.to_string(), "1f(16)");
    /// assert!(NumberLiteral::new("1g", Base::new(16).unwrap(), 0).is_err());
    /// ```
    pub fn new(digits: &str, base: Base, position: usize) -> Result<Self, ConversionError> {
        validate_digits(digits, base)?;
        Ok(Self { digits: digits.to_string(),
                  negative: false,
                  base,
                  position,
                  value: OnceCell::new() })
    }

    /// Returns the literal with a sign applied, starting at `position`.
    #[must_use]
    pub fn with_sign(self, negative: bool, position: usize) -> Self {
        Self { negative,
               position,
               value: OnceCell::new(),
               ..self }
    }

    /// The raw digit run as written.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether the literal carries a `-` sign.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The declared base.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Byte offset of the literal (including its sign) in the expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Decodes the literal, caching the result.
    ///
    /// # Errors
    /// Returns `ConversionError::Overflow` if the value does not fit in an
    /// `i128`.
    pub fn value(&self) -> Result<i128, ConversionError> {
        if let Some(value) = self.value.get() {
            return Ok(*value);
        }
        let text = if self.negative { format!("-{}", self.digits) } else { self.digits.clone() };
        let value = parse_to_decimal(&text, self.base)?;
        Ok(*self.value.get_or_init(|| value))
    }
}

impl PartialEq for NumberLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
        && self.negative == other.negative
        && self.base == other.base
        && self.position == other.position
    }
}

impl Eq for NumberLiteral {}

impl std::fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}{}({})", self.digits, self.base)
    }
}

/// One validated element of an expression, in infix or postfix order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An operand.
    Number(NumberLiteral),
    /// A binary operator.
    Operator {
        /// The operator.
        op:       Operator,
        /// Byte offset of the operator in the expression.
        position: usize,
    },
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Operator { op, .. } => write!(f, "{op}"),
        }
    }
}
