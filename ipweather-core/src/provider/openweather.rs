use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    Config,
    error::{Result, WeatherError, truncate_body},
    model::{Conditions, Coordinates, CurrentWeather, Forecast, ForecastEntry, Units},
};

use super::{FORECAST_DAYS, WeatherProvider};

const SERVICE: &str = "OpenWeather";
const SLOTS_PER_DAY: u32 = 8;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key().to_owned(), config.openweather_url.clone())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        coords: Coordinates,
        units: Units,
        lang: &str,
        extra: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, lat = coords.latitude, lon = coords.longitude, %units, lang, "requesting");

        let mut query = vec![
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("units", units.api_param().to_string()),
            ("lang", lang.to_string()),
            ("appid", self.api_key.clone()),
        ];
        query.extend(extra.iter().cloned());

        let network = |source| WeatherError::Network {
            service: SERVICE,
            source,
        };

        let res = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(network)?;

        let status = res.status();
        let body = res.text().await.map_err(network)?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%status, endpoint, "OpenWeather rejected the API key");
            return Err(WeatherError::Auth {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        if !status.is_success() {
            tracing::warn!(%status, endpoint, "OpenWeather request failed");
            return Err(WeatherError::Status {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::Decode {
            service: SERVICE,
            source,
        })
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwPrecipitation {
    #[serde(rename = "1h")]
    one_hour: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
    rain: OwPrecipitation,
    snow: OwPrecipitation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCity {
    name: String,
    country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: String,
    main: OwMain,
    wind: OwWind,
    rain: OwPrecipitation,
    snow: OwPrecipitation,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    #[serde(default)]
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn conditions(
    main: OwMain,
    wind: OwWind,
    rain: OwPrecipitation,
    snow: OwPrecipitation,
) -> Conditions {
    Conditions {
        temperature: main.temp,
        temperature_min: main.temp_min,
        temperature_max: main.temp_max,
        feels_like: main.feels_like,
        humidity_pct: main.humidity,
        wind_speed: wind.speed,
        rain_1h: rain.one_hour,
        snow_1h: snow.one_hour,
    }
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(res: OwCurrentResponse) -> Self {
        CurrentWeather {
            name: res.name,
            conditions: conditions(res.main, res.wind, res.rain, res.snow),
        }
    }
}

impl From<OwForecastEntry> for ForecastEntry {
    fn from(entry: OwForecastEntry) -> Self {
        let time = DateTime::<Utc>::from_timestamp(entry.dt, 0).filter(|_| entry.dt != 0);
        let label = if entry.dt_txt.is_empty() {
            time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        } else {
            entry.dt_txt
        };

        ForecastEntry {
            time,
            label,
            conditions: conditions(entry.main, entry.wind, entry.rain, entry.snow),
        }
    }
}

impl From<OwForecastResponse> for Forecast {
    fn from(res: OwForecastResponse) -> Self {
        Forecast {
            city: res.city.name,
            country: res.city.country,
            entries: res.list.into_iter().map(ForecastEntry::from).collect(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        coords: Coordinates,
        units: Units,
        lang: &str,
    ) -> Result<CurrentWeather> {
        let parsed: OwCurrentResponse = self.fetch("weather", coords, units, lang, &[]).await?;
        tracing::info!(place = %parsed.name, "current weather received");

        Ok(parsed.into())
    }

    async fn forecast5(&self, coords: Coordinates, units: Units, lang: &str) -> Result<Forecast> {
        let cnt = (FORECAST_DAYS * SLOTS_PER_DAY).to_string();
        let parsed: OwForecastResponse = self
            .fetch("forecast", coords, units, lang, &[("cnt", cnt)])
            .await?;
        tracing::info!(slots = parsed.list.len(), "forecast received");

        Ok(parsed.into())
    }
}
