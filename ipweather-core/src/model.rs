use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// What ip-api.com knows about the caller's public address.
///
/// Every field defaults to its zero value when the service leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationInfo {
    pub status: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub isp: String,
    pub org: String,
    #[serde(rename = "as")]
    pub as_number: String,
    pub message: Option<String>,
    pub query: String,
}

impl LocationInfo {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.lat,
            longitude: self.lon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Measurement system, addressed by its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Units {
    pub fn code(&self) -> &'static str {
        match self {
            Units::Celsius => "C",
            Units::Fahrenheit => "F",
            Units::Kelvin => "K",
        }
    }

    /// Token OpenWeather expects in the `units` query parameter.
    pub fn api_param(&self) -> &'static str {
        match self {
            Units::Celsius => "metric",
            Units::Fahrenheit => "imperial",
            Units::Kelvin => "standard",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Celsius, Units::Fahrenheit, Units::Kelvin]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Units {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "C" => Ok(Units::Celsius),
            "F" => Ok(Units::Fahrenheit),
            "K" => Ok(Units::Kelvin),
            _ => Err(WeatherError::Config(format!(
                "Unknown units code '{value}'. Supported codes: C, F, K."
            ))),
        }
    }
}

/// Readings shared by the current observation and every forecast slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// Millimeters over the last hour.
    pub rain_1h: f64,
    /// Millimeters over the last hour.
    pub snow_1h: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Place name as the weather provider knows it.
    pub name: String,
    pub conditions: Conditions,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: Option<DateTime<Utc>>,
    pub label: String,
    pub conditions: Conditions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub country: String,
    /// Chronological, exactly as the provider returned them.
    pub entries: Vec<ForecastEntry>,
}
