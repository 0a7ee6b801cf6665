/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, including its principal square root and the handful of operators the
/// walkthrough needs.
pub mod complex;

/// The value module defines the runtime values shown by the walkthrough.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Kind` of each variant.
/// - Knows the type name and zero value of every kind.
/// - Provides a square root that promotes negative reals to complex results.
pub mod core;
