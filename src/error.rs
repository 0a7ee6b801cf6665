/// Numeric conversion errors.
///
/// Raised by the checked conversions in `util::num` when a value cannot be
/// moved between integer and floating-point types without losing information.
pub mod conversion_error;
/// Driver errors.
///
/// Everything the walkthrough driver can fail with while rendering or writing
/// its sections: I/O failures on the output sink, conversion failures and
/// unknown section names.
pub mod tour_error;

pub use conversion_error::ConversionError;
pub use tour_error::TourError;
