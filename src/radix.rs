/// The `Base` type.
///
/// A radix validated to lie in `2..=36`. Once constructed it can be used by
/// the codec and converter without further range checks.
pub mod base;
/// Radix conversion between digit strings and signed integers.
///
/// Implements Horner's method for parsing and repeated division for
/// formatting, both with an optional leading sign and checked arithmetic.
pub mod convert;
/// The digit codec.
///
/// Maps single characters to digit values and back over the fixed
/// `0-9A-Z` alphabet.
pub mod digit;

pub use base::Base;
pub use convert::{format_from_decimal, format_in_base, parse_to_decimal};
pub use digit::{digit_char, digit_value, is_valid_digit};
