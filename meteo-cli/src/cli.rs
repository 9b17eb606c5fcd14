use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use meteo_core::{
    Config, ProviderId, WeatherReporter,
    config::FALLBACK_LOCATION,
    provider::{default_provider_from_config, provider_from_id},
};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Weather reporter")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `show` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Store the default location and provider.
    Configure {
        /// Default location; prompted for when absent.
        #[arg(long)]
        location: Option<String>,

        /// Default provider id, e.g. "static".
        #[arg(long)]
        provider: Option<ProviderId>,
    },

    /// Show weather for a location.
    Show {
        /// Location name; falls back to the configured default, then Paris.
        location: Option<String>,

        /// Provider id overriding the configured default.
        #[arg(long)]
        provider: Option<ProviderId>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let command = self.command.unwrap_or(Command::Show {
            location: None,
            provider: None,
        });

        match command {
            Command::Configure { location, provider } => configure(location, provider),
            Command::Show { location, provider } => {
                let config = Config::load()?;
                let stdout = std::io::stdout();
                show(&config, location, provider, &mut stdout.lock())
            }
        }
    }
}

/// Composition root: build the provider, inject it into a reporter, report once.
fn show<W: Write>(
    config: &Config,
    location: Option<String>,
    provider: Option<ProviderId>,
    out: &mut W,
) -> Result<()> {
    let service = match provider {
        Some(id) => provider_from_id(id),
        None => default_provider_from_config(config)?,
    };
    let reporter = WeatherReporter::new(service);
    let location = config.resolve_location(location);

    info!(%location, "showing weather");
    reporter.report_weather_to(&location, out)
}

fn configure(location: Option<String>, provider: Option<ProviderId>) -> Result<()> {
    let mut config = Config::load()?;

    let location = match location {
        Some(location) => location,
        None => {
            let current = config.default_location.as_deref().unwrap_or(FALLBACK_LOCATION);
            inquire::Text::new("Default location:")
                .with_default(current)
                .prompt()?
        }
    };

    config.set_default_location(location);
    if let Some(id) = provider {
        config.set_default_provider(id);
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
