use crate::error::ConversionError;

#[derive(Debug)]
/// Represents all errors that can occur while running the walkthrough.
pub enum TourError {
    /// Writing to the output sink failed.
    Io(std::io::Error),
    /// A checked numeric conversion inside a section failed.
    Conversion(ConversionError),
    /// A section was requested by a name that does not exist.
    UnknownSection {
        /// The name that was requested.
        name: String,
    },
}

impl std::fmt::Display for TourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error: failed to write output: {e}."),
            Self::Conversion(e) => write!(f, "Error: {e}"),
            Self::UnknownSection { name } => write!(f,
                                                    "Error: unknown section '{name}'. Use --list to see the available sections."),
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Conversion(e) => Some(e),
            Self::UnknownSection { .. } => None,
        }
    }
}

impl From<std::io::Error> for TourError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConversionError> for TourError {
    fn from(e: ConversionError) -> Self {
        Self::Conversion(e)
    }
}
