#[derive(Debug)]
/// Represents all errors that can occur while converting between numeric
/// types.
pub enum ConversionError {
    /// The value was `NaN` or infinite.
    NotFinite {
        /// The offending value.
        value: f64,
    },
    /// A negative value was converted to an unsigned type.
    Negative {
        /// The offending value.
        value: f64,
    },
    /// A value with a fractional part was converted to an integer type.
    Fractional {
        /// The offending value.
        value: f64,
    },
    /// The value does not fit the target type exactly.
    TooLarge {
        /// The offending value, rendered as text since it may be any width.
        value: String,
    },
    /// The value is not numeric at all.
    NotNumeric {
        /// The type name of the value that was supplied.
        type_name: &'static str,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { value } => {
                write!(f, "Conversion error: {value} is not a finite number.")
            },
            Self::Negative { value } => write!(f,
                                               "Conversion error: {value} is negative and cannot become unsigned."),
            Self::Fractional { value } => write!(f,
                                                 "Conversion error: {value} is fractional and cannot become an integer."),
            Self::TooLarge { value } => {
                write!(f, "Conversion error: {value} cannot be represented exactly.")
            },
            Self::NotNumeric { type_name } => {
                write!(f, "Conversion error: expected a number, found {type_name}.")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
