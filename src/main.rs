use basics::{
    run,
    tour::{SECTION_NAMES, Section, TourConfig},
};
use clap::Parser;

/// basics walks through fundamental language features and prints what each
/// one produces.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seeds the random draw so the output is reproducible.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Prints only the named section. May be given more than once.
    #[arg(long = "section", value_parser = parse_section)]
    sections: Vec<Section>,

    /// Prints a header line before each section.
    #[arg(long)]
    headers: bool,

    /// Lists the section names and exits.
    #[arg(short, long)]
    list: bool,
}

fn parse_section(name: &str) -> Result<Section, String> {
    Section::from_name(name).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for name in SECTION_NAMES {
            println!("{name}");
        }
        return;
    }

    let config = TourConfig { seed: args.seed,
                              sections: args.sections,
                              headers: args.headers,
                              ..TourConfig::default() };

    if let Err(e) = run(&config) {
        eprintln!("{e}");
    }
}
