//! Reqwest-backed weather source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::dto::CurrentWeatherDto;
use crate::config::ApiCredential;
use crate::domain::Coordinates;
use crate::domain::ports::{UpstreamError, WeatherReading, WeatherSource};
use crate::outbound::http::{JsonFetcher, decode, endpoint};

const PROVIDER: &str = "openweather";

/// Weather source over OpenWeatherMap, metric units.
pub struct OpenWeatherSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: Url,
    api_key: ApiCredential,
    timeout: Duration,
}

impl OpenWeatherSource {
    /// Build a source rooted at `base_url`, for example
    /// `https://api.openweathermap.org/data/2.5`.
    pub fn new(
        fetcher: Arc<dyn JsonFetcher>,
        base_url: Url,
        api_key: ApiCredential,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current_weather(&self, at: Coordinates) -> Result<WeatherReading, UpstreamError> {
        let latitude = at.latitude.to_string();
        let longitude = at.longitude.to_string();
        let url = endpoint(
            &self.base_url,
            &["weather"],
            &[
                ("lat", latitude.as_str()),
                ("lon", longitude.as_str()),
                ("appid", self.api_key.expose()),
                ("units", "metric"),
            ],
        )?;
        let body = self.fetcher.fetch_json(url, self.timeout).await?;
        let dto: CurrentWeatherDto = decode(body, PROVIDER)?;
        dto.into_reading().map_err(UpstreamError::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::http::MockJsonFetcher;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn requests_metric_units_for_the_coordinate() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher
            .expect_fetch_json()
            .withf(|url, _| {
                url.path() == "/data/2.5/weather"
                    && url.query() == Some("lat=48.8566&lon=2.3522&appid=owm-key&units=metric")
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "main": {"temp": 18.4, "humidity": 60},
                    "weather": [{"main": "Rain"}],
                    "wind": {"speed": 3}
                }))
            });
        let source = OpenWeatherSource::new(
            Arc::new(fetcher),
            Url::parse("https://weather.example/data/2.5").expect("valid url"),
            ApiCredential::new("owm-key"),
            Duration::from_secs(8),
        );

        let reading = source
            .current_weather(Coordinates::new(48.8566, 2.3522))
            .await
            .expect("reading");

        assert_eq!(reading.condition, "Rain");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_blocks_are_parse_errors() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher
            .expect_fetch_json()
            .returning(|_, _| Ok(json!({"cod": "401", "message": "Invalid API key"})));
        let source = OpenWeatherSource::new(
            Arc::new(fetcher),
            Url::parse("https://weather.example").expect("valid url"),
            ApiCredential::new("bad"),
            Duration::from_secs(8),
        );

        let error = source
            .current_weather(Coordinates::origin())
            .await
            .expect_err("shape");

        assert!(matches!(error, UpstreamError::Parse { .. }));
    }
}
