//! Port for current-conditions lookups.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::UpstreamError;
use crate::domain::Coordinates;

/// Raw metric readings from a weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Air temperature in degrees Celsius.
    pub temperature_celsius: f64,
    /// Apparent temperature in degrees Celsius.
    pub feels_like_celsius: Option<f64>,
    /// Relative humidity percentage.
    pub humidity_percent: f64,
    /// Sea-level pressure in hPa.
    pub pressure_hpa: Option<f64>,
    /// Condition group such as `Rain` or `Clear`.
    pub condition: String,
    /// Wind speed in metres per second.
    pub wind_speed_mps: f64,
    /// Visibility in metres.
    pub visibility_metres: Option<f64>,
    /// Sunrise instant.
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset instant.
    pub sunset: Option<DateTime<Utc>>,
}

/// Current weather at a coordinate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the latest readings for `at` in metric units.
    async fn current_weather(&self, at: Coordinates) -> Result<WeatherReading, UpstreamError>;
}
