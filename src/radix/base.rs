use crate::error::ConversionError;

/// A numeral base in `2..=36`.
///
/// The range is checked once, at construction, so everything downstream can
/// take a `Base` without re-validating it.
///
/// # Example
/// ```
/// use mixradix::radix::Base;
///
/// assert_eq!(Base::new(16).unwrap().get(), 16);
/// assert!(Base::new(1).is_err());
/// assert!(Base::new(37).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base.
    pub const MIN: u32 = 2;
    /// Largest supported base, one digit per symbol of `0-9A-Z`.
    pub const MAX: u32 = 36;
    /// Base ten.
    pub const DECIMAL: Self = Self(10);

    /// Validates `base` and wraps it.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidBase` if `base` is outside `2..=36`.
    pub fn new(base: i64) -> Result<Self, ConversionError> {
        u32::try_from(base).ok()
                           .filter(|b| (Self::MIN..=Self::MAX).contains(b))
                           .map(Self)
                           .ok_or(ConversionError::InvalidBase { base })
    }

    /// Returns the radix as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Base {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
