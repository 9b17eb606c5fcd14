use crate::{
    Config, Location, WeatherReport,
    provider::static_weather::StaticWeatherProvider,
};
use std::{fmt::Debug, str::FromStr, sync::Arc};

pub mod static_weather;

/// Contract every weather source fulfils. Implementations may fail; the
/// reporter passes such failures through untouched.
pub trait WeatherService: Send + Sync + Debug {
    fn get_weather(&self, location: &Location) -> anyhow::Result<WeatherReport>;
}

impl<T: WeatherService + ?Sized> WeatherService for &T {
    fn get_weather(&self, location: &Location) -> anyhow::Result<WeatherReport> {
        (**self).get_weather(location)
    }
}

impl<T: WeatherService + ?Sized> WeatherService for Box<T> {
    fn get_weather(&self, location: &Location) -> anyhow::Result<WeatherReport> {
        (**self).get_weather(location)
    }
}

impl<T: WeatherService + ?Sized> WeatherService for Arc<T> {
    fn get_weather(&self, location: &Location) -> anyhow::Result<WeatherReport> {
        (**self).get_weather(location)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    Static,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Static => "static",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Static]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider '{0}'. Supported providers: static.")]
pub struct UnknownProviderError(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "static" => Ok(ProviderId::Static),
            _ => Err(UnknownProviderError(value.to_owned())),
        }
    }
}

/// Construct a provider for an explicit ProviderId.
pub fn provider_from_id(id: ProviderId) -> Box<dyn WeatherService> {
    match id {
        ProviderId::Static => Box::new(StaticWeatherProvider),
    }
}

/// Construct the provider named by `default_provider`, falling back to `static`.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherService>> {
    let id = config.default_provider_id()?;
    Ok(provider_from_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let parsed: ProviderId = id.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_parse_ignores_case() {
        assert_eq!("STATIC".parse::<ProviderId>(), Ok(ProviderId::Static));
    }

    #[test]
    fn unknown_provider_error() {
        let err = "openweathermap".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, UnknownProviderError("openweathermap".into()));
        assert!(err.to_string().contains("Unknown provider 'openweathermap'"));
    }

    #[test]
    fn default_provider_from_config_falls_back_to_static() {
        let provider = default_provider_from_config(&Config::default()).expect("provider");
        let report = provider.get_weather(&Location::from("Nice")).expect("report");
        assert_eq!(report.as_str(), "Temps ensoleillé à Nice");
    }

    #[test]
    fn default_provider_from_config_rejects_unknown_id() {
        let cfg = Config {
            default_provider: Some("nope".into()),
            ..Config::default()
        };
        let err = default_provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown provider 'nope'"));
    }

    fn report_via<S: WeatherService>(service: S, location: &Location) -> WeatherReport {
        service.get_weather(location).expect("static provider never fails")
    }

    #[test]
    fn smart_pointers_forward_to_inner_service() {
        let loc = Location::from("Brest");
        let provider = StaticWeatherProvider;
        let direct = report_via(provider, &loc);

        let boxed: Box<dyn WeatherService> = Box::new(StaticWeatherProvider);

        assert_eq!(report_via(&provider, &loc), direct);
        assert_eq!(report_via(boxed, &loc), direct);
        assert_eq!(report_via(Arc::new(provider), &loc), direct);
    }
}
