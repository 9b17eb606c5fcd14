//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The `WeatherService` contract and the offline provider implementing it
//! - `WeatherReporter`, which receives its service by constructor injection
//! - Shared domain models (locations, reports)
//! - Configuration handling
//!
//! It is used by `meteo-cli`, but any binary can wire its own service into a reporter.

pub mod config;
pub mod model;
pub mod provider;
pub mod reporter;

pub use config::Config;
pub use model::{Location, WeatherReport};
pub use provider::{ProviderId, WeatherService, static_weather::StaticWeatherProvider};
pub use reporter::WeatherReporter;
