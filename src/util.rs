/// Integer division helpers.
///
/// This module provides the three division flavours the calculator exposes
/// (truncating, floor, and floor-convention modulo) over `i128`, each checked
/// for overflow. All functions return `None` if the result is not
/// representable; division by zero is the caller's responsibility.
pub mod num;
