use crate::error::ConversionError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Number of significant bits in an `f64` mantissa, hidden bit included.
const F64_MANTISSA_BITS: u32 = 53;
/// `2^64` as an `f64`, the first value past `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `ConversionError::TooLarge` if the value exceeds `MAX_SAFE_U64_INT`
/// in absolute value.
///
/// ## Example
/// ```
/// use basics::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(25).unwrap(), 25.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64) -> Result<f64, ConversionError> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(ConversionError::TooLarge { value: value.to_string() });
    }
    Ok(value as f64)
}

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `ConversionError::TooLarge` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use basics::{error::ConversionError, util::num::u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234).unwrap(), 1234.0);
///
/// let err = u64_to_f64_checked(u64::MAX).unwrap_err();
/// assert!(matches!(err, ConversionError::TooLarge { .. }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked(value: u64) -> Result<f64, ConversionError> {
    if value > MAX_SAFE_U64_INT {
        return Err(ConversionError::TooLarge { value: value.to_string() });
    }
    Ok(value as f64)
}

/// Converts a `u128` to `f64` when the conversion is exact.
///
/// Unlike the `u64` variant, this does not cap the magnitude: large powers of
/// two such as `1 << 100` are exact in an `f64` and convert fine. What matters
/// is that the span between the highest and lowest set bit fits the 53-bit
/// mantissa.
///
/// ## Errors
/// Returns `ConversionError::TooLarge` when rounding would be required.
///
/// ## Example
/// ```
/// use basics::util::num::u128_to_f64_checked;
///
/// assert_eq!(u128_to_f64_checked(1 << 100).unwrap(), 2f64.powi(100));
/// assert!(u128_to_f64_checked((1 << 100) + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u128_to_f64_checked(value: u128) -> Result<f64, ConversionError> {
    if value == 0 {
        return Ok(0.0);
    }

    let significant = value >> value.trailing_zeros();
    if u128::BITS - significant.leading_zeros() > F64_MANTISSA_BITS {
        return Err(ConversionError::TooLarge { value: value.to_string() });
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns an error for non-finite, negative, out-of-range, or fractional
/// values.
///
/// ## Example
/// ```
/// use basics::{error::ConversionError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(5.0).unwrap(), 5);
///
/// let err = f64_to_u64_checked(-5.0).unwrap_err();
/// assert!(matches!(err, ConversionError::Negative { .. }));
///
/// let err = f64_to_u64_checked(1.23).unwrap_err();
/// assert!(matches!(err, ConversionError::Fractional { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Result<u64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NotFinite { value });
    }
    if value < 0.0 {
        return Err(ConversionError::Negative { value });
    }
    if value.fract() != 0.0 {
        return Err(ConversionError::Fractional { value });
    }
    if value >= U64_LIMIT {
        return Err(ConversionError::TooLarge { value: value.to_string() });
    }
    Ok(value as u64)
}
