//! Small pure functions over fixed-width numbers and strings.
//!
//! Every function here is total: no input is rejected. Integer arithmetic
//! wraps on overflow, as two's-complement arithmetic at the declared width
//! does.

/// Adds two integers.
///
/// # Example
/// ```
/// use basics::funcs::add;
///
/// assert_eq!(add(42, 13), 55);
/// assert_eq!(add(i64::MAX, 1), i64::MIN);
/// ```
#[must_use]
pub const fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

/// Adds two integers.
///
/// Behaves exactly like [`add`].
///
/// # Example
/// ```
/// use basics::funcs::add_v2;
///
/// assert_eq!(add_v2(42, 13), 55);
/// ```
#[must_use]
pub const fn add_v2(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

/// Returns both arguments in reverse order.
///
/// # Example
/// ```
/// use basics::funcs::swap;
///
/// assert_eq!(swap("hello", "world"), ("world", "hello"));
/// ```
#[must_use]
pub const fn swap<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str) {
    (y, x)
}

/// Splits `sum` into two parts, the first being four ninths of it.
///
/// Division truncates toward zero, and the second part is whatever remains, so
/// the two parts always add back up to `sum`.
///
/// # Example
/// ```
/// use basics::funcs::split;
///
/// assert_eq!(split(17), (7, 10));
/// assert_eq!(split(-17), (-7, -10));
/// ```
#[must_use]
pub const fn split(sum: i64) -> (i64, i64) {
    let x = sum.wrapping_mul(4) / 9;
    let y = sum.wrapping_sub(x);
    (x, y)
}

/// Returns `x * 10 + 1`.
///
/// # Example
/// ```
/// use basics::funcs::need_int;
///
/// assert_eq!(need_int(2), 21);
/// ```
#[must_use]
pub const fn need_int(x: i64) -> i64 {
    x.wrapping_mul(10).wrapping_add(1)
}

/// Returns a tenth of `x`.
#[must_use]
pub fn need_float(x: f64) -> f64 {
    x * 0.1
}
