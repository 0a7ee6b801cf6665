//! Typed constants shown by the walkthrough.
//!
//! Each constant carries an explicit type. Uses that need a different type
//! convert explicitly at the use site.

/// Two-digit approximation of pi.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14;

/// A huge number: a 1 bit shifted left 100 places.
///
/// This needs 101 bits, so it only fits a `u128`.
pub const BIG: u128 = 1 << 100;

/// `BIG` shifted right 99 places again, leaving `1 << 1`.
#[allow(clippy::cast_possible_truncation)]
pub const SMALL: i64 = (BIG >> 99) as i64;

/// The largest unsigned 64-bit value, `2^64 - 1`.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_INT: u64 = ((1_u128 << 64) - 1) as u64;

/// A string constant outside the ASCII range.
pub const WORLD: &str = "世界";

/// A boolean constant.
pub const TRUTH: bool = true;
