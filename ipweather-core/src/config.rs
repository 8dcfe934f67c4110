use crate::{
    error::{Result, WeatherError},
    model::Units,
};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OWM_API_KEY";

pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json";
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_LANG: &str = "ru";

const MISSING_API_KEY: &str = "Задайте переменную окружения OWM_API_KEY!";

/// Everything a run needs, read once at startup and handed to each collaborator.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    pub units: Units,
    pub lang: String,
    pub geo_url: String,
    pub openweather_url: String,
}

impl Config {
    /// Build a config with the hard-coded defaults: Celsius, Russian, public endpoints.
    ///
    /// An empty API key is rejected.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(WeatherError::Config(MISSING_API_KEY.to_string()));
        }

        Ok(Self {
            api_key,
            units: Units::default(),
            lang: DEFAULT_LANG.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            openweather_url: DEFAULT_OPENWEATHER_URL.to_string(),
        })
    }

    /// Read the API key through `lookup`, usually `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(API_KEY_VAR)
            .ok_or_else(|| WeatherError::Config(MISSING_API_KEY.to_string()))?;
        Self::new(key)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    pub fn with_openweather_url(mut self, url: impl Into<String>) -> Self {
        self.openweather_url = url.into();
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("geo_url", &self.geo_url)
            .field("openweather_url", &self.openweather_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_errors_when_key_missing() {
        let err = Config::from_lookup(|_| None).unwrap_err();

        assert!(matches!(err, WeatherError::Config(_)));
        assert!(err.to_string().contains("OWM_API_KEY"));
    }

    #[test]
    fn from_lookup_errors_when_key_empty() {
        let err = Config::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, WeatherError::Config(_)));
    }

    #[test]
    fn new_rejects_empty_key() {
        let err = Config::new("").unwrap_err();

        assert!(matches!(err, WeatherError::Config(_)));
        assert!(err.to_string().contains("OWM_API_KEY"));
    }

    #[test]
    fn whitespace_key_is_passed_through() {
        let cfg = Config::from_lookup(|_| Some(" ".to_string())).expect("non-empty key");
        assert_eq!(cfg.api_key(), " ");
    }

    #[test]
    fn from_lookup_reads_only_the_api_key_var() {
        let cfg = Config::from_lookup(|name| {
            (name == API_KEY_VAR).then(|| "SECRET".to_string())
        })
        .expect("key is present");

        assert_eq!(cfg.api_key(), "SECRET");
        assert_eq!(cfg.units, Units::Celsius);
        assert_eq!(cfg.lang, "ru");
        assert_eq!(cfg.geo_url, DEFAULT_GEO_URL);
        assert_eq!(cfg.openweather_url, DEFAULT_OPENWEATHER_URL);
    }

    #[test]
    fn endpoint_overrides() {
        let cfg = Config::new("KEY")
            .unwrap()
            .with_geo_url("http://localhost:1/json")
            .with_openweather_url("http://localhost:2");

        assert_eq!(cfg.geo_url, "http://localhost:1/json");
        assert_eq!(cfg.openweather_url, "http://localhost:2");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = Config::new("SECRET").unwrap();
        let dbg = format!("{cfg:?}");

        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }
}
