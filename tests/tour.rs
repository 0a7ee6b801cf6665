use std::io::{self, Write};

use basics::{
    error::TourError,
    tour::{Globals, SECTION_NAMES, Section, Tour, TourConfig},
};

fn render(sections: &[Section]) -> Vec<String> {
    let mut tour = Tour::new(TourConfig { seed: Some(7),
                                          sections: sections.to_vec(),
                                          ..TourConfig::default() });
    tour.lines().unwrap_or_else(|e| panic!("Tour failed: {e}"))
}

fn assert_section(section: Section, expected: &[&str]) {
    assert_eq!(render(&[section]), expected, "section '{section}'");
}

#[test]
fn section_names_round_trip() {
    assert_eq!(SECTION_NAMES.len(), Section::ALL.len());
    for (section, name) in Section::ALL.iter().zip(SECTION_NAMES) {
        assert_eq!(section.name(), *name);
        assert_eq!(Section::from_name(name).unwrap(), *section);
    }
}

#[test]
fn unknown_section_is_error() {
    let err = Section::from_name("closures").unwrap_err();
    assert!(matches!(err, TourError::UnknownSection { ref name } if name == "closures"));
}

#[test]
fn functions_sections() {
    assert_section(Section::Functions, &["55"]);
    assert_section(Section::FunctionsContinued, &["55"]);
    assert_section(Section::MultipleResults, &["world hello"]);
    assert_section(Section::NamedResults, &["7 10"]);
}

#[test]
fn standard_library_sections() {
    assert_section(Section::Imports, &["Now you have 2.6457513110645907 problems."]);
    assert_section(Section::ExportedNames, &["3.141592653589793"]);
}

#[test]
fn variable_sections() {
    assert_section(Section::Variables, &["0 false false false"]);
    assert_section(Section::VariablesWithInitializers, &["1 2 true false no!"]);
    assert_section(Section::ShortVariableDeclarations, &["1 2 3 true false no!"]);
    assert_section(Section::Zero, &["0 0 false \"\""]);
}

#[test]
fn basic_types_use_globals() {
    let lines = render(&[Section::BasicTypes]);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Type: bool Value: false");
    assert_eq!(lines[1], "Type: u64 Value: 18446744073709551615");
    assert!(lines[2].starts_with("Type: ComplexNumber Value: ("));

    let z = Globals::default().z;
    assert!((z.real - 2.0).abs() < 1e-12 && (z.imaginary - 3.0).abs() < 1e-12);
}

#[test]
fn globals_are_configurable() {
    let mut globals = Globals::default();
    globals.to_be = true;
    globals.max_int = 7;

    let mut tour = Tour::new(TourConfig { sections: vec![Section::BasicTypes],
                                          globals,
                                          ..TourConfig::default() });
    let lines = tour.lines().unwrap();
    assert_eq!(lines[0], "Type: bool Value: true");
    assert_eq!(lines[1], "Type: u64 Value: 7");
}

#[test]
fn conversion_and_inference_sections() {
    assert_section(Section::TypeConversions, &["3 4 5"]);
    assert_section(Section::TypeInference,
                   &["v is of type i32", "f is of type f64", "g is of type ComplexNumber"]);
}

#[test]
fn constant_sections() {
    assert_section(Section::Constants, &["Hello 世界", "Happy 3.14 Day", "Rust rules? true"]);

    let lines = render(&[Section::NumericConstants]);
    assert_eq!(lines[0], "21");
    assert_eq!(lines[1], "0.2");
    let big: f64 = lines[2].parse().unwrap();
    assert_eq!(big, 2f64.powi(100) * 0.1);
}

#[test]
fn random_draw_is_bounded_and_seedable() {
    for seed in 0..50 {
        let mut tour = Tour::new(TourConfig { seed: Some(seed),
                                              sections: vec![Section::Packages],
                                              ..TourConfig::default() });
        let line = tour.lines().unwrap().remove(0);
        let n: u32 = line.strip_prefix("My favorite number is ")
                         .and_then(|n| n.parse().ok())
                         .unwrap_or_else(|| panic!("Unexpected line: {line}"));
        assert!(n < 10);
    }

    assert_eq!(render(&[]), render(&[]));
}

#[test]
fn full_run_covers_every_section() {
    let mut tour = Tour::new(TourConfig { seed: Some(1),
                                          headers: true,
                                          ..TourConfig::default() });
    let lines = tour.lines().unwrap();
    let headers = lines.iter().filter(|l| l.starts_with("== ")).count();
    assert_eq!(headers, Section::ALL.len());
    assert_eq!(lines[0], "== packages ==");
}

#[test]
fn selection_keeps_canonical_order() {
    let mut tour = Tour::new(TourConfig { sections: vec![Section::Constants, Section::Functions],
                                          headers: true,
                                          ..TourConfig::default() });
    assert_eq!(tour.selected(), vec![Section::Functions, Section::Constants]);
    assert_eq!(tour.lines().unwrap(),
               vec!["== functions ==",
                    "55",
                    "== constants ==",
                    "Hello 世界",
                    "Happy 3.14 Day",
                    "Rust rules? true"]);
}

#[test]
fn write_to_emits_lines() {
    let mut out = Vec::new();
    let mut tour = Tour::new(TourConfig { sections: vec![Section::MultipleResults, Section::Zero],
                                          ..TourConfig::default() });
    tour.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "world hello\n0 0 false \"\"\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_reported() {
    let mut tour = Tour::new(TourConfig::default());
    let err = tour.write_to(&mut BrokenPipe).unwrap_err();
    assert!(matches!(err, TourError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
