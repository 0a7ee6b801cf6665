//! # basics
//!
//! basics is a guided walkthrough of fundamental language features written in
//! Rust. It pairs a handful of small pure functions with a driver that prints
//! what constants, multiple results, zero values, conversions and complex
//! numbers look like in practice.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::TourError, tour::{Tour, TourConfig}};

/// Typed constants used by the walkthrough.
///
/// Constants that would otherwise be untyped carry an explicit type here, and
/// each use site converts them explicitly to the type it needs.
pub mod constants;
/// Provides the error types for conversions and the driver.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (conversion, output, lookup).
/// - Implements `Display` and `std::error::Error` for user-facing reporting.
pub mod error;
/// Pure arithmetic and string helpers.
///
/// `add`, `add_v2`, `swap`, `split`, `need_int` and `need_float`. None of them
/// can fail.
pub mod funcs;
/// Drives the walkthrough.
///
/// This module selects sections, renders each one to text lines and writes
/// them to an output sink.
///
/// # Responsibilities
/// - Declares the named sections and their canonical order.
/// - Holds the run configuration and the global values passed into the run.
/// - Renders and writes the selected sections.
pub mod tour;
/// General utilities for safe numeric conversion.
pub mod util;
/// Runtime values, their kinds and zero values, and complex numbers.
pub mod value;

/// Runs the walkthrough and writes it to standard output.
///
/// # Errors
/// Returns an error if a section fails to render or stdout rejects a write.
///
/// # Examples
/// ```
/// use basics::{run, tour::{Section, TourConfig}};
///
/// let config = TourConfig { sections: vec![Section::Constants],
///                           ..TourConfig::default() };
/// assert!(run(&config).is_ok());
/// ```
pub fn run(config: &TourConfig) -> Result<(), TourError> {
    let mut tour = Tour::new(config.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    tour.write_to(&mut out)
}
