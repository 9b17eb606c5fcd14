//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring a weather service into the reporter
//! - Interactive configuration

use clap::Parser;

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);
    cmd.run()
}
