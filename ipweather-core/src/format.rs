//! All user-facing text lives here.

use crate::model::{Conditions, CurrentWeather, ForecastEntry, LocationInfo};

/// Label in front of the current-conditions line.
pub const CURRENT_LABEL: &str = "Сейчас";

/// Render one line of readings behind `label`.
///
/// Temperatures and wind get one decimal, "feels like" and precipitation none,
/// humidity is a whole percentage.
pub fn conditions_line(label: &str, conditions: &Conditions) -> String {
    let Conditions {
        temperature,
        temperature_min,
        temperature_max,
        feels_like,
        humidity_pct,
        wind_speed,
        rain_1h,
        snow_1h,
    } = conditions;

    format!(
        "{label}: 🌡️ {temperature:.1}℃ (от {temperature_min:.1}℃ до {temperature_max:.1}℃) \
         ощущается как {feels_like:.0}℃ 💦 {humidity_pct}% 🌬️ {wind_speed:.1} м/с \
         ☔ {rain_1h:.0} мм ❄️ {snow_1h:.0} мм"
    )
}

pub fn current_line(current: &CurrentWeather) -> String {
    conditions_line(CURRENT_LABEL, &current.conditions)
}

pub fn forecast_line(entry: &ForecastEntry) -> String {
    conditions_line(&entry.label, &entry.conditions)
}

/// "country, city, place" where the place name comes from the weather provider.
pub fn summary_line(location: &LocationInfo, current: &CurrentWeather) -> String {
    format!("{}, {}, {}", location.country, location.city, current.name)
}
