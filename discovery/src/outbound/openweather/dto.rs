//! DTOs for decoding OpenWeatherMap current-weather payloads.

use chrono::DateTime;
use serde::Deserialize;

use crate::domain::ports::WeatherReading;

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherDto {
    pub(super) main: MainDto,
    #[serde(default)]
    pub(super) weather: Vec<ConditionDto>,
    pub(super) wind: WindDto,
    pub(super) visibility: Option<f64>,
    pub(super) sys: Option<SysDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainDto {
    pub(super) temp: f64,
    pub(super) feels_like: Option<f64>,
    pub(super) humidity: f64,
    pub(super) pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    pub(super) main: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WindDto {
    pub(super) speed: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct SysDto {
    pub(super) sunrise: Option<i64>,
    pub(super) sunset: Option<i64>,
}

impl CurrentWeatherDto {
    pub(super) fn into_reading(self) -> Result<WeatherReading, String> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.main)
            .ok_or_else(|| "weather condition list is empty".to_owned())?;
        let (sunrise, sunset) = self.sys.map_or((None, None), |sys| {
            (
                sys.sunrise.and_then(|secs| DateTime::from_timestamp(secs, 0)),
                sys.sunset.and_then(|secs| DateTime::from_timestamp(secs, 0)),
            )
        });
        Ok(WeatherReading {
            temperature_celsius: self.main.temp,
            feels_like_celsius: self.main.feels_like,
            humidity_percent: self.main.humidity,
            pressure_hpa: self.main.pressure,
            condition,
            wind_speed_mps: self.wind.speed,
            visibility_metres: self.visibility,
            sunrise,
            sunset,
        })
    }
}
