use crate::{
    error::ConversionError,
    util::num::{i64_to_f64_checked, u64_to_f64_checked},
    value::complex::{self, ComplexNumber},
};

/// The kind of a runtime value, independent of its contents.
///
/// Each kind knows its type name and its zero value: the value a variable of
/// that type holds when it is declared without an initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `i64`
    Int,
    /// `u64`
    Uint,
    /// `f64`
    Float,
    /// `ComplexNumber`
    Complex,
    /// `String`
    Str,
}

impl Kind {
    /// Returns the type name used when printing a value of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "i64",
            Self::Uint => "u64",
            Self::Float => "f64",
            Self::Complex => "ComplexNumber",
            Self::Str => "String",
        }
    }

    /// Returns the zero value of this kind.
    ///
    /// # Example
    /// ```
    /// use basics::value::core::{Kind, Value};
    ///
    /// assert_eq!(Kind::Int.zero(), Value::Int(0));
    /// assert_eq!(Kind::Bool.zero(), Value::Bool(false));
    /// assert_eq!(Kind::Str.zero().quoted(), "\"\"");
    /// ```
    #[must_use]
    pub fn zero(self) -> Value {
        match self {
            Self::Bool => Value::Bool(bool::default()),
            Self::Int => Value::Int(i64::default()),
            Self::Uint => Value::Uint(u64::default()),
            Self::Float => Value::Float(f64::default()),
            Self::Complex => Value::Complex(complex::ZERO),
            Self::Str => Value::Str(String::default()),
        }
    }
}

/// Represents a value printed by the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// An unsigned 64-bit integer.
    Uint(u64),
    /// A double precision floating-point number.
    Float(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// An owned string.
    Str(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Complex(_) => Kind::Complex,
            Self::Str(_) => Kind::Str,
        }
    }

    /// Returns the type name of this value.
    ///
    /// # Example
    /// ```
    /// use basics::value::core::Value;
    ///
    /// assert_eq!(Value::from(u64::MAX).type_name(), "u64");
    /// assert_eq!(Value::from(false).type_name(), "bool");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Formats the value like `Display`, except strings are quoted and
    /// escaped.
    #[must_use]
    pub fn quoted(&self) -> String {
        match self {
            Self::Str(s) => format!("{s:?}"),
            _ => self.to_string(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not real.
    ///
    /// Integers convert only when they are exactly representable.
    ///
    /// # Errors
    /// `ConversionError::NotNumeric` for booleans, strings and complex values,
    /// `ConversionError::TooLarge` for integers beyond `2^53 - 1`.
    pub fn as_real(&self) -> Result<f64, ConversionError> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Int(n) => i64_to_f64_checked(*n),
            Self::Uint(n) => u64_to_f64_checked(*n),
            _ => Err(ConversionError::NotNumeric { type_name: self.type_name() }),
        }
    }

    /// Computes the square root of a numeric value.
    ///
    /// - Nonnegative integers and reals return a real square root.
    /// - Negative integers and reals return a purely imaginary complex result.
    /// - Complex values use their principal square root, collapsing to a real
    ///   when the imaginary part vanishes.
    ///
    /// # Errors
    /// Non-numeric inputs produce `ConversionError::NotNumeric`.
    ///
    /// # Example
    /// ```
    /// use basics::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Int(9).sqrt().unwrap(), Value::Float(3.0));
    /// assert_eq!(Value::Float(-4.0).sqrt().unwrap(),
    ///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
    /// assert!(Value::from("nine").sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> Result<Self, ConversionError> {
        match self {
            Self::Int(_) | Self::Uint(_) | Self::Float(_) => {
                let x = self.as_real()?;
                if x >= 0.0 {
                    Ok(Self::Float(x.sqrt()))
                } else {
                    Ok(Self::Complex(ComplexNumber::new(0.0, (-x).sqrt())))
                }
            },
            Self::Complex(c) => Ok(c.sqrt().checked_as_real()),
            _ => Err(ConversionError::NotNumeric { type_name: self.type_name() }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
