use crate::radix::Base;

/// Digit symbols in value order. Output always uses the uppercase forms.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the value of a single digit character.
///
/// `'0'..='9'` map to 0–9, and both `'A'..='Z'` and `'a'..='z'` map to 10–35.
/// Any other character yields `None`.
///
/// # Example
/// ```
/// use mixradix::radix::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('f'), Some(15));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('_'), None);
/// ```
#[must_use]
pub const fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Returns the uppercase character for a digit value.
///
/// # Panics
/// Panics if `value` is greater than 35. Callers only pass remainders of a
/// division by a validated [`Base`], which are always in range.
#[must_use]
pub const fn digit_char(value: u32) -> char {
    ALPHABET[value as usize] as char
}

/// Checks whether `c` is a digit of `base`.
#[must_use]
pub const fn is_valid_digit(c: char, base: Base) -> bool {
    match digit_value(c) {
        Some(value) => value < base.get(),
        None => false,
    }
}
