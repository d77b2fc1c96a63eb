/// Divides `a` by `b`, rounding toward zero.
///
/// Returns `None` when the quotient overflows (`i128::MIN / -1`).
///
/// # Panics
/// Panics if `b` is zero.
///
/// # Example
/// ```
/// use mixradix::util::num::trunc_div;
///
/// assert_eq!(trunc_div(7, 2), Some(3));
/// assert_eq!(trunc_div(-7, 2), Some(-3));
/// assert_eq!(trunc_div(i128::MIN, -1), None);
/// ```
#[must_use]
pub const fn trunc_div(a: i128, b: i128) -> Option<i128> {
    assert!(b != 0, "trunc_div by zero");
    a.checked_div(b)
}

/// Divides `a` by `b`, rounding toward negative infinity.
///
/// Returns `None` when the quotient overflows (`i128::MIN / -1`).
///
/// # Panics
/// Panics if `b` is zero.
///
/// # Example
/// ```
/// use mixradix::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-7, -2), Some(3));
/// ```
#[must_use]
pub const fn floor_div(a: i128, b: i128) -> Option<i128> {
    assert!(b != 0, "floor_div by zero");
    let Some(q) = a.checked_div(b) else {
        return None;
    };
    // Truncation rounded up for a negative inexact quotient.
    if a % b != 0 && (a < 0) != (b < 0) { Some(q - 1) } else { Some(q) }
}

/// Remainder of [`floor_div`]: the result takes the sign of `b`.
///
/// Satisfies `floor_div(a, b) * b + floor_mod(a, b) == a` whenever the
/// quotient is representable. Never overflows.
///
/// # Panics
/// Panics if `b` is zero.
///
/// # Example
/// ```
/// use mixradix::util::num::floor_mod;
///
/// assert_eq!(floor_mod(-7, 2), 1);
/// assert_eq!(floor_mod(7, -2), -1);
/// assert_eq!(floor_mod(i128::MIN, -1), 0);
/// ```
#[must_use]
pub const fn floor_mod(a: i128, b: i128) -> i128 {
    assert!(b != 0, "floor_mod by zero");
    // MIN % -1 is mathematically 0, which is what wrapping_rem yields.
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}
