use crate::{
    Config,
    error::Result,
    model::{Coordinates, CurrentWeather, Forecast, Units},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Number of days the forecast call asks for.
pub const FORECAST_DAYS: u32 = 5;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        coords: Coordinates,
        units: Units,
        lang: &str,
    ) -> Result<CurrentWeather>;

    /// 3-hour slots covering [`FORECAST_DAYS`] days, oldest first.
    async fn forecast5(&self, coords: Coordinates, units: Units, lang: &str) -> Result<Forecast>;
}

/// Construct the weather provider the config points at.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_uses_configured_endpoint() {
        let cfg = Config::new("KEY")
            .unwrap()
            .with_openweather_url("http://localhost:9");
        let provider = provider_from_config(&cfg);

        let dbg = format!("{provider:?}");
        assert!(dbg.contains("http://localhost:9"));
        assert!(!dbg.contains("KEY"));
    }
}
