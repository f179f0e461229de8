//! VIN Decoder CLI Application
//!
//! This is the command-line interface for the VIN decoder.
//! It uses the vin-decoder library and adds:
//! - Configuration file loading
//! - Manufacturer lookup against the NHTSA vPIC registry
//! - Report generation (text/JSON)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vin_decoder::{Decoder, ManufacturerLookup};

mod config;
mod registry;
mod report;

use config::{AppConfig, OutputFormat};
use registry::VpicRegistry;
use report::VinReport;

/// VIN Decoder - Validate and decode Vehicle Identification Numbers
#[derive(Parser, Debug)]
#[command(name = "vin-cli")]
#[command(about = "Validate and decode 17-character Vehicle Identification Numbers", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Args {
    /// Vehicle Identification Number to decode
    #[arg(value_name = "VIN")]
    vin: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the manufacturer lookup
    #[arg(long)]
    offline: bool,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("VIN Decoder CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", vin_decoder::VERSION);

    let Some(input) = args.vin.as_deref() else {
        println!("Please input a Vehicle Identification Number.");
        println!("Try 'vin-cli --help' for more information.");
        return Ok(ExitCode::FAILURE);
    };

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let vin = input.trim().to_ascii_uppercase();
    let decoder = Decoder::with_config(config.decoder.clone());

    let registry = if args.offline || !config.lookup.enabled {
        log::debug!("Manufacturer lookup disabled");
        None
    } else {
        Some(VpicRegistry::new(&config.lookup))
    };
    let lookup = registry.as_ref().map(|r| r as &dyn ManufacturerLookup);

    let report = VinReport::build(&vin, &decoder, lookup);

    // An invalid VIN is reported on stdout and still exits 0
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
