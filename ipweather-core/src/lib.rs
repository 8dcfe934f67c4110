//! Core library for the `ipweather` CLI.
//!
//! This crate defines:
//! - Startup configuration (API key, units, language, endpoints)
//! - Location lookup by public IP address
//! - The OpenWeather client for current conditions and the 5-day forecast
//! - Formatting of readings into report lines
//!
//! It is used by `ipweather-cli`, but the pieces can be driven separately.

pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::{Result, WeatherError};
pub use location::{IpApiResolver, LocationResolver};
pub use model::{
    Conditions, Coordinates, CurrentWeather, Forecast, ForecastEntry, LocationInfo, Units,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use report::Report;
