/// Renders and writes the walkthrough.
///
/// Holds the `Tour` driver, its `TourConfig`, and the `Globals` that stand in
/// for package-level variables.
pub mod core;
/// The named sections of the walkthrough, in their canonical order.
pub mod section;

pub use self::core::{Globals, Tour, TourConfig};

pub use self::section::{SECTION_NAMES, Section};
