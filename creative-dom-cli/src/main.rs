mod error;
mod scenario;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::scenario::Scenario;

const DEFAULT_LOG: &str = "creative-dom.log";

/// Replay a creative scenario against an in-memory document and print the
/// resulting classes and inline styles.
#[derive(Parser, Debug)]
#[command(name = "creative-dom-cli", version, about)]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Log file
    #[arg(long, default_value = DEFAULT_LOG)]
    log: PathBuf,
}

fn run(args: Args) -> Result<(), CliError> {
    let log_file = File::create(&args.log)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let scenario = Scenario::load(&args.scenario)?;
    log::info!("loaded scenario {}", args.scenario.display());

    let report = scenario.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
