use anyhow::Result;

use crate::model::{Location, WeatherReport};

use super::WeatherService;

/// Text placed before the location in every report.
pub const SUNNY_TEMPLATE_PREFIX: &str = "Temps ensoleillé à ";

/// Offline provider: always reports sunshine for whatever location it is given.
/// Pure and deterministic, never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticWeatherProvider;

impl StaticWeatherProvider {
    pub fn new() -> Self {
        Self
    }
}

impl WeatherService for StaticWeatherProvider {
    fn get_weather(&self, location: &Location) -> Result<WeatherReport> {
        Ok(WeatherReport::new(format!("{SUNNY_TEMPLATE_PREFIX}{location}")))
    }
}
