//! Current conditions with a plausible generated fallback.

use std::sync::Arc;

use tracing::warn;

use crate::domain::numeric::{mps_to_kmh, pick_index, round_to_i32, round_to_u32, scale_unit};
use crate::domain::ports::{RandomSource, WeatherReading, WeatherSource};
use crate::domain::weather::condition_glyph;
use crate::domain::{Coordinates, WeatherSnapshot};

/// Sea-level pressure reported when the provider omits it.
pub const STANDARD_PRESSURE_HPA: u32 = 1013;

const DEFAULT_MOCK_CONDITION: (&str, &str) = ("Sunny", "☀️");

const MOCK_CONDITIONS: [(&str, &str); 4] = [
    DEFAULT_MOCK_CONDITION,
    ("Cloudy", "☁️"),
    ("Rainy", "🌧️"),
    ("Snowy", "❄️"),
];

/// Produces [`WeatherSnapshot`] values for coordinates.
pub struct WeatherResolver {
    source: Option<Arc<dyn WeatherSource>>,
    random: Arc<dyn RandomSource>,
}

impl WeatherResolver {
    /// Build a resolver; `source` is `None` when no credential is configured.
    pub fn new(source: Option<Arc<dyn WeatherSource>>, random: Arc<dyn RandomSource>) -> Self {
        Self { source, random }
    }

    /// Current weather at `at`. Never fails.
    pub async fn get_weather(&self, at: Coordinates) -> WeatherSnapshot {
        let Some(source) = &self.source else {
            return self.mock_snapshot();
        };
        match source.current_weather(at).await {
            Ok(reading) => self.from_reading(reading),
            Err(error) => {
                warn!(
                    provider = "weather",
                    latitude = at.latitude,
                    longitude = at.longitude,
                    error = %error,
                    "weather lookup failed; generating conditions"
                );
                self.mock_snapshot()
            }
        }
    }

    fn from_reading(&self, reading: WeatherReading) -> WeatherSnapshot {
        let temperature = round_to_i32(reading.temperature_celsius);
        let feels_like = reading.feels_like_celsius.map_or_else(
            || temperature.saturating_add(round_to_i32(scale_unit(self.random.next_unit(), -2.0, 2.0))),
            round_to_i32,
        );
        WeatherSnapshot {
            temperature,
            icon: condition_glyph(&reading.condition).to_owned(),
            condition: reading.condition,
            humidity: round_to_u32(reading.humidity_percent).min(100),
            wind_speed: round_to_u32(mps_to_kmh(reading.wind_speed_mps)),
            feels_like,
            pressure: reading
                .pressure_hpa
                .map_or(STANDARD_PRESSURE_HPA, round_to_u32),
            visibility: reading
                .visibility_metres
                .map_or_else(|| self.generated_visibility(), round_to_u32),
            sunrise: reading.sunrise,
            sunset: reading.sunset,
        }
    }

    fn mock_snapshot(&self) -> WeatherSnapshot {
        let (condition, icon) = MOCK_CONDITIONS
            .get(pick_index(self.random.next_unit(), MOCK_CONDITIONS.len()))
            .copied()
            .unwrap_or(DEFAULT_MOCK_CONDITION);
        WeatherSnapshot {
            temperature: round_to_i32(scale_unit(self.random.next_unit(), 10.0, 40.0)),
            condition: condition.to_owned(),
            humidity: round_to_u32(scale_unit(self.random.next_unit(), 0.0, 100.0)),
            wind_speed: round_to_u32(scale_unit(self.random.next_unit(), 0.0, 20.0)),
            icon: icon.to_owned(),
            feels_like: round_to_i32(scale_unit(self.random.next_unit(), 10.0, 40.0)),
            pressure: STANDARD_PRESSURE_HPA,
            visibility: self.generated_visibility(),
            sunrise: None,
            sunset: None,
        }
    }

    fn generated_visibility(&self) -> u32 {
        round_to_u32(scale_unit(self.random.next_unit(), 5_000.0, 15_000.0))
    }
}
