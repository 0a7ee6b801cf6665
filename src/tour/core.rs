use std::io::Write;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    constants::{BIG, MAX_INT, PI, SMALL, TRUTH, WORLD},
    error::TourError,
    funcs::{add, add_v2, need_float, need_int, split, swap},
    tour::section::Section,
    util::num::{f64_to_u64_checked, i64_to_f64_checked, u128_to_f64_checked},
    value::{
        complex::ComplexNumber,
        core::{Kind, Value},
    },
};

/// Values that would otherwise live as process-wide variables.
///
/// They are built once and handed to the driver through `TourConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct Globals {
    /// A boolean left at `false`.
    pub to_be:   bool,
    /// The largest unsigned 64-bit value.
    pub max_int: u64,
    /// The principal square root of `-5 + 12i`.
    pub z:       ComplexNumber,
}

impl Default for Globals {
    fn default() -> Self {
        Self { to_be:   false,
               max_int: MAX_INT,
               z:       ComplexNumber::new(-5.0, 12.0).sqrt(), }
    }
}

/// Settings for one run of the walkthrough.
#[derive(Debug, Clone, Default)]
pub struct TourConfig {
    /// Seed for the random draw. `None` seeds from the operating system.
    pub seed:     Option<u64>,
    /// Sections to render. Empty means every section.
    pub sections: Vec<Section>,
    /// Whether to print a `== name ==` header before each section.
    pub headers:  bool,
    /// The values shown by the `basic-types` section.
    pub globals:  Globals,
}

/// The walkthrough driver.
///
/// Renders each selected section to text lines, in canonical order,
/// regardless of the order sections were requested in.
#[derive(Debug)]
pub struct Tour {
    config: TourConfig,
    rng:    StdRng,
}

impl Tour {
    /// Creates a driver for the given configuration.
    #[must_use]
    pub fn new(config: TourConfig) -> Self {
        let rng = config.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { config, rng }
    }

    /// Returns the sections this driver renders, in output order.
    #[must_use]
    pub fn selected(&self) -> Vec<Section> {
        Section::ALL.iter()
                    .copied()
                    .filter(|s| self.config.sections.is_empty() || self.config.sections.contains(s))
                    .collect()
    }

    /// Renders every selected section and concatenates the lines.
    ///
    /// Headers are included when the configuration asks for them.
    ///
    /// # Errors
    /// Fails if a section's numeric conversion fails.
    ///
    /// # Example
    /// ```
    /// use basics::tour::{Section, Tour, TourConfig};
    ///
    /// let mut tour = Tour::new(TourConfig { sections: vec![Section::NamedResults],
    ///                                       ..TourConfig::default() });
    /// assert_eq!(tour.lines().unwrap(), vec!["7 10"]);
    /// ```
    pub fn lines(&mut self) -> Result<Vec<String>, TourError> {
        let mut lines = Vec::new();

        for section in self.selected() {
            if self.config.headers {
                lines.push(format!("== {section} =="));
            }
            lines.extend(self.section_lines(section)?);
        }

        Ok(lines)
    }

    /// Renders a single section.
    ///
    /// # Errors
    /// Fails if a numeric conversion inside the section fails.
    pub fn section_lines(&mut self, section: Section) -> Result<Vec<String>, TourError> {
        log::debug!("Rendering section '{section}'");

        let lines = match section {
            Section::Packages => {
                vec![format!("My favorite number is {}", self.rng.gen_range(0..10_u32))]
            },
            Section::Imports => {
                vec![format!("Now you have {} problems.", Value::Int(7).sqrt()?)]
            },
            Section::ExportedNames => vec![std::f64::consts::PI.to_string()],
            Section::Functions => vec![add(42, 13).to_string()],
            Section::FunctionsContinued => vec![add_v2(42, 13).to_string()],
            Section::MultipleResults => {
                let (a, b) = swap("hello", "world");
                vec![format!("{a} {b}")]
            },
            Section::NamedResults => {
                let (x, y) = split(17);
                vec![format!("{x} {y}")]
            },
            Section::Variables => {
                let i = i64::default();
                let (c, python, java) = (bool::default(), bool::default(), bool::default());
                vec![format!("{i} {c} {python} {java}")]
            },
            Section::VariablesWithInitializers => {
                let (i, j): (i64, i64) = (1, 2);
                let (c, python, java) = (true, false, "no!");
                vec![format!("{i} {j} {c} {python} {java}")]
            },
            Section::ShortVariableDeclarations => {
                let (i, j): (i64, i64) = (1, 2);
                let k = 3;
                let (c, python, java) = (true, false, "no!");
                vec![format!("{i} {j} {k} {c} {python} {java}")]
            },
            Section::BasicTypes => {
                let globals = &self.config.globals;
                [Value::from(globals.to_be), Value::from(globals.max_int), Value::from(globals.z)]
                    .iter()
                    .map(|v| format!("Type: {} Value: {v}", v.type_name()))
                    .collect::<Vec<_>>()
            },
            Section::Zero => {
                let zeros = [Kind::Int, Kind::Float, Kind::Bool, Kind::Str].map(Kind::zero);
                vec![zeros.iter().map(Value::quoted).collect::<Vec<_>>().join(" ")]
            },
            Section::TypeConversions => {
                let (x, y): (i64, i64) = (3, 4);
                let f = i64_to_f64_checked(x * x + y * y)?.sqrt();
                let u = f64_to_u64_checked(f)?;
                vec![format!("{x} {y} {u}")]
            },
            Section::TypeInference => {
                let v = 42;
                let f = 3.142;
                let g = ComplexNumber::new(0.867, 0.5);
                vec![format!("v is of type {}", short_type_name(&v)),
                     format!("f is of type {}", short_type_name(&f)),
                     format!("g is of type {}", short_type_name(&g)),]
            },
            Section::Constants => vec![format!("Hello {WORLD}"),
                                       format!("Happy {PI} Day"),
                                       format!("Rust rules? {TRUTH}"),],
            Section::NumericConstants => {
                vec![need_int(SMALL).to_string(),
                     need_float(i64_to_f64_checked(SMALL)?).to_string(),
                     need_float(u128_to_f64_checked(BIG)?).to_string(),]
            },
        };

        Ok(lines)
    }

    /// Writes every selected section to `out`, one line at a time.
    ///
    /// # Errors
    /// Fails if rendering fails or the sink rejects a write.
    ///
    /// # Example
    /// ```
    /// use basics::tour::{Section, Tour, TourConfig};
    ///
    /// let mut out = Vec::new();
    /// let mut tour = Tour::new(TourConfig { sections: vec![Section::Functions],
    ///                                       ..TourConfig::default() });
    /// tour.write_to(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "55\n");
    /// ```
    pub fn write_to<W: Write>(&mut self, out: &mut W) -> Result<(), TourError> {
        log::info!("Writing {} of {} sections", self.selected().len(), Section::ALL.len());

        for line in self.lines()? {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        Ok(())
    }
}

/// Returns the last path segment of the inferred type of `value`.
fn short_type_name<T>(_value: &T) -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
