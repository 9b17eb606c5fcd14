use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    model::Location,
    provider::{ProviderId, UnknownProviderError},
};

/// Location reported when neither the command line nor the config names one.
pub const FALLBACK_LOCATION: &str = "Paris";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_location = "Lyon"
/// default_provider = "static"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Location used by `meteo show` when none is given.
    pub default_location: Option<String>,

    /// Optional default provider id, e.g. "static".
    pub default_provider: Option<String>,
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId, `static` if unset.
    pub fn default_provider_id(&self) -> Result<ProviderId, UnknownProviderError> {
        match self.default_provider.as_deref() {
            Some(id) => id.parse(),
            None => Ok(ProviderId::default()),
        }
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    pub fn set_default_location(&mut self, location: impl Into<String>) {
        self.default_location = Some(location.into());
    }

    /// Pick the location to report: explicit argument, then config, then Paris.
    pub fn resolve_location(&self, explicit: Option<String>) -> Location {
        explicit
            .or_else(|| self.default_location.clone())
            .map(Location::from)
            .unwrap_or_else(|| Location::from(FALLBACK_LOCATION))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration TOML")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = self.to_toml_string()?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config saved");
        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_id_falls_back_to_static() {
        let cfg = Config::default();
        assert_eq!(cfg.default_provider_id(), Ok(ProviderId::Static));
    }

    #[test]
    fn default_provider_id_rejects_unknown() {
        let cfg = Config {
            default_provider: Some("openweather".into()),
            ..Config::default()
        };
        assert!(cfg.default_provider_id().is_err());
    }

    #[test]
    fn set_default_provider_stores_id_string() {
        let mut cfg = Config::default();
        cfg.set_default_provider(ProviderId::Static);
        assert_eq!(cfg.default_provider.as_deref(), Some("static"));
    }

    #[test]
    fn resolve_location_prefers_explicit_argument() {
        let mut cfg = Config::default();
        cfg.set_default_location("Lyon");

        assert_eq!(cfg.resolve_location(Some("Nantes".into())).as_str(), "Nantes");
        assert_eq!(cfg.resolve_location(None).as_str(), "Lyon");
    }

    #[test]
    fn resolve_location_falls_back_to_paris() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_location(None).as_str(), FALLBACK_LOCATION);
    }

    #[test]
    fn resolve_location_keeps_explicit_empty_string() {
        let mut cfg = Config::default();
        cfg.set_default_location("Lyon");
        assert_eq!(cfg.resolve_location(Some(String::new())).as_str(), "");
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.set_default_location("Bordeaux");
        cfg.set_default_provider(ProviderId::Static);

        let text = cfg.to_toml_string().expect("serialize");
        assert!(text.contains("default_location = \"Bordeaux\""));

        let parsed = Config::from_toml_str(&text).expect("parse");
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_toml_is_default_config() {
        assert_eq!(Config::from_toml_str("").expect("parse"), Config::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = Config::from_toml_str("default_location = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration TOML"));
    }
}
