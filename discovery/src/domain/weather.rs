//! Weather snapshot record and condition glyph table.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Glyph used when a condition has no table entry.
pub const DEFAULT_WEATHER_GLYPH: &str = "🌤️";

/// Current conditions at a coordinate, already rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Air temperature in whole degrees Celsius.
    pub temperature: i32,
    /// Provider condition group, for example `Rain`.
    pub condition: String,
    /// Relative humidity percentage.
    pub humidity: u32,
    /// Wind speed in whole km/h.
    pub wind_speed: u32,
    /// Glyph matching `condition`.
    pub icon: String,
    /// Apparent temperature in whole degrees Celsius.
    pub feels_like: i32,
    /// Sea-level pressure in hPa.
    pub pressure: u32,
    /// Visibility in metres.
    pub visibility: u32,
    /// Sunrise instant when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset instant when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<DateTime<Utc>>,
}

/// Map a provider condition group to its glyph.
///
/// # Examples
/// ```
/// use discovery::domain::condition_glyph;
///
/// assert_eq!(condition_glyph("Rain"), "🌧️");
/// assert_eq!(condition_glyph("Aurora"), "🌤️");
/// ```
pub fn condition_glyph(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Haze" | "Fog" => "🌫️",
        "Smoke" | "Dust" | "Sand" | "Ash" | "Squall" => "💨",
        "Tornado" => "🌪️",
        _ => DEFAULT_WEATHER_GLYPH,
    }
}
