use crate::{
    error::ConversionError,
    radix::{Base, digit_char, digit_value},
};

/// Splits an optional leading `+` or `-` off `text`.
///
/// Returns whether the number is negative together with the digit part.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Checks that `digits` is a non-empty run of digits of `base`.
///
/// No sign is accepted here; use [`split_sign`] first.
///
/// # Errors
/// - `EmptyOperand` if `digits` is empty.
/// - `InvalidDigit` naming the first character that is not a digit of `base`.
pub fn validate_digits(digits: &str, base: Base) -> Result<(), ConversionError> {
    if digits.is_empty() {
        return Err(ConversionError::EmptyOperand { text: digits.to_string() });
    }
    match digits.chars()
                .find(|&c| !digit_value(c).is_some_and(|d| d < base.get()))
    {
        Some(digit) => Err(ConversionError::InvalidDigit { digit,
                                                           base: base.get() }),
        None => Ok(()),
    }
}

/// Converts a signed digit string in `base` to an integer.
///
/// The text is an optional `+` or `-` followed by one or more digits of
/// `base`, upper or lower case. The magnitude is accumulated with Horner's
/// method, most significant digit first, then the sign is applied.
///
/// # Errors
/// - `EmptyOperand` if no digit follows the optional sign.
/// - `InvalidDigit` if a character is not a digit of `base`.
/// - `Overflow` if the value does not fit in an `i128`.
///
/// # Example
/// ```
/// use mixradix::radix::{Base, parse_to_decimal};
///
/// let hex = Base::new(16).unwrap();
/// assert_eq!(parse_to_decimal("ff", hex), Ok(255));
/// assert_eq!(parse_to_decimal("-1A", hex), Ok(-26));
/// assert!(parse_to_decimal("-", hex).is_err());
/// ```
pub fn parse_to_decimal(text: &str, base: Base) -> Result<i128, ConversionError> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() {
        return Err(ConversionError::EmptyOperand { text: text.to_string() });
    }
    validate_digits(digits, base)?;

    let overflow = || ConversionError::Overflow { text: text.to_string() };
    let radix = u128::from(base.get());
    let mut magnitude: u128 = 0;
    for digit in digits.chars().filter_map(digit_value) {
        magnitude = magnitude.checked_mul(radix)
                             .and_then(|m| m.checked_add(u128::from(digit)))
                             .ok_or_else(overflow)?;
    }

    let value = if negative {
        0_i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    value.ok_or_else(overflow)
}

/// Renders `value` as a minimal digit string in `base`.
///
/// Zero renders as `"0"`. Other values are rendered from their magnitude by
/// repeated division, least significant digit first, then reversed; negative
/// values get a leading `-`. Digits above 9 are uppercase.
///
/// # Example
/// ```
/// use mixradix::radix::{Base, format_from_decimal};
///
/// assert_eq!(format_from_decimal(255, Base::new(16).unwrap()), "FF");
/// assert_eq!(format_from_decimal(-5, Base::new(2).unwrap()), "-101");
/// assert_eq!(format_from_decimal(0, Base::new(36).unwrap()), "0");
/// ```
#[must_use]
pub fn format_from_decimal(value: i128, base: Base) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let radix = u128::from(base.get());
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        // The remainder is below 36, so the narrowing cannot truncate.
        #[allow(clippy::cast_possible_truncation)]
        digits.push(digit_char((magnitude % radix) as u32));
        magnitude /= radix;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Renders `value` in a base given as a plain integer.
///
/// # Errors
/// Returns `ConversionError::InvalidBase` if `base` is outside `2..=36`; the
/// check happens before any digit is produced.
pub fn format_in_base(value: i128, base: i64) -> Result<String, ConversionError> {
    let base = Base::new(base)?;
    Ok(format_from_decimal(value, base))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn all_bases() -> impl Iterator<Item = Base> {
        (2..=36).filter_map(|b| Base::new(b).ok())
    }

    #[test]
    fn round_trip_every_base() {
        let samples = (0..=1024).chain([4095, 65_535, 1 << 40, i128::from(u64::MAX), i128::MAX]);
        for base in all_bases() {
            for n in samples.clone() {
                let text = format_from_decimal(n, base);
                assert_eq!(parse_to_decimal(&text, base), Ok(n), "{n} in base {base}");
            }
        }
    }

    #[test]
    fn sign_symmetry() {
        for base in all_bases() {
            for text in ["1", "10", "11", "101"] {
                let positive = parse_to_decimal(text, base).unwrap();
                assert_eq!(parse_to_decimal(&format!("-{text}"), base), Ok(-positive));
                assert_eq!(parse_to_decimal(&format!("+{text}"), base), Ok(positive));
            }
        }
    }

    #[test]
    fn zero_is_canonical() {
        for base in all_bases() {
            assert_eq!(format_from_decimal(0, base), "0");
            assert_eq!(parse_to_decimal("-0", base), Ok(0));
            assert_eq!(parse_to_decimal("000", base), Ok(0));
        }
    }

    #[test]
    fn extremes_survive() {
        let base = Base::new(7).unwrap();
        for n in [i128::MIN, i128::MIN + 1, i128::MAX] {
            assert_eq!(parse_to_decimal(&format_from_decimal(n, base), base), Ok(n));
        }
    }

    #[test]
    fn case_insensitive_input_uppercase_output() {
        let base = Base::new(36).unwrap();
        let value = parse_to_decimal("zZ", base).unwrap();
        assert_eq!(value, 35 * 36 + 35);
        assert_eq!(format_from_decimal(value, base), "ZZ");
    }

    #[test]
    fn missing_digits_are_empty_operands() {
        let base = Base::DECIMAL;
        for text in ["", "-", "+"] {
            assert_eq!(parse_to_decimal(text, base),
                       Err(ConversionError::EmptyOperand { text: text.to_string() }));
        }
    }

    #[test]
    fn invalid_digit_names_character_and_base() {
        let binary = Base::new(2).unwrap();
        assert_eq!(parse_to_decimal("1021", binary),
                   Err(ConversionError::InvalidDigit { digit: '2', base: 2 }));
        assert_eq!(parse_to_decimal("--1", binary),
                   Err(ConversionError::InvalidDigit { digit: '-', base: 2 }));
    }

    #[test]
    fn overflow_is_reported() {
        let text = "1".repeat(128);
        assert_eq!(parse_to_decimal(&text, Base::new(2).unwrap()),
                   Err(ConversionError::Overflow { text: text.clone() }));

        let min = format!("-1{}", "0".repeat(127));
        assert_eq!(parse_to_decimal(&min, Base::new(2).unwrap()), Ok(i128::MIN));
        let past_max = "1".to_string() + &"0".repeat(127);
        assert!(parse_to_decimal(&past_max, Base::new(2).unwrap()).is_err());
    }

    #[test]
    fn format_checks_base_first() {
        assert_eq!(format_in_base(10, 1), Err(ConversionError::InvalidBase { base: 1 }));
        assert_eq!(format_in_base(10, 37), Err(ConversionError::InvalidBase { base: 37 }));
        assert_eq!(format_in_base(10, 2), Ok("1010".to_string()));
        assert_eq!(format_in_base(35, 36), Ok("Z".to_string()));
    }
}
