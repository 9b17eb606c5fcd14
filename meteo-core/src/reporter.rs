use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{model::Location, provider::WeatherService};

/// Prints weather reports obtained from an injected [`WeatherService`].
///
/// The service is handed over at construction and kept for the reporter's
/// whole lifetime; there is no way to swap it afterwards.
#[derive(Debug, Clone)]
pub struct WeatherReporter<S> {
    service: S,
}

impl<S: WeatherService> WeatherReporter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Write the report for `location` to stdout as a single line.
    pub fn report_weather(&self, location: &Location) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.report_weather_to(location, &mut out)
    }

    /// Write the report for `location` to `out` as a single line.
    ///
    /// Errors from the service are returned as-is and nothing is written.
    pub fn report_weather_to<W: Write>(&self, location: &Location, out: &mut W) -> Result<()> {
        let report = self.service.get_weather(location)?;

        debug!(%location, service = ?self.service, "reporting weather");

        writeln!(out, "{report}").context("Failed to write weather report")?;
        out.flush().context("Failed to flush weather report output")?;

        Ok(())
    }
}
