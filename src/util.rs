/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever a value crosses between `i64`, `u64`, `u128`
/// and `f64`.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or a `ConversionError` otherwise.
pub mod num;
