use crate::error::TourError;

/// Defines the walkthrough sections from a single table.
///
/// Each entry provides a variant name and the section's public name. The
/// macro produces:
/// - the `Section` enum, variants in table order,
/// - `Section::ALL` (every section, in order),
/// - `Section::name`,
/// - `SECTION_NAMES` (the public names, in order).
macro_rules! sections {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal
        ),* $(,)?
    ) => {
        /// One named block of walkthrough output.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Section {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Section {
            /// Every section, in output order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the public name of the section.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        /// Public names of every section, in output order.
        pub const SECTION_NAMES: &[&str] = &[$($name,)*];
    };
}

sections! {
    /// A pseudo-random draw.
    Packages => "packages",
    /// A square root from the standard library.
    Imports => "imports",
    /// An exported constant.
    ExportedNames => "exported-names",
    /// A function with two typed parameters.
    Functions => "functions",
    /// A function whose parameters share a type.
    FunctionsContinued => "functions-continued",
    /// A function returning two values.
    MultipleResults => "multiple-results",
    /// A function returning two named parts.
    NamedResults => "named-results",
    /// Variables left at their default values.
    Variables => "variables",
    /// Variables declared with initializers.
    VariablesWithInitializers => "variables-with-initializers",
    /// Variables whose types are inferred.
    ShortVariableDeclarations => "short-variable-declarations",
    /// Type names of the globals.
    BasicTypes => "basic-types",
    /// Zero values of the basic kinds.
    Zero => "zero",
    /// Explicit numeric conversions.
    TypeConversions => "type-conversions",
    /// Types inferred from literals.
    TypeInference => "type-inference",
    /// Character, string and boolean constants.
    Constants => "constants",
    /// Huge constants narrowed to ordinary types.
    NumericConstants => "numeric-constants",
}

impl Section {
    /// Looks up a section by its public name.
    ///
    /// # Errors
    /// Returns `TourError::UnknownSection` if no section has that name.
    ///
    /// # Example
    /// ```
    /// use basics::tour::Section;
    ///
    /// assert_eq!(Section::from_name("zero").unwrap(), Section::Zero);
    /// assert!(Section::from_name("nope").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, TourError> {
        Self::ALL.iter()
                 .copied()
                 .find(|section| section.name() == name)
                 .ok_or_else(|| TourError::UnknownSection { name: name.to_owned() })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
