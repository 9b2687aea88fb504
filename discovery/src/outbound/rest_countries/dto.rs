//! DTOs for decoding REST Countries payloads.
//!
//! Currency and language maps keep provider order (`serde_json` is built
//! with `preserve_order`), so "first listed" is stable.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::Coordinates;
use crate::domain::ports::CountryRecord;

#[derive(Debug, Deserialize)]
pub(super) struct CountryDto {
    pub(super) name: CountryNameDto,
    #[serde(default)]
    pub(super) capital: Vec<String>,
    #[serde(default)]
    pub(super) latlng: Vec<f64>,
    pub(super) population: Option<u64>,
    #[serde(default)]
    pub(super) currencies: Map<String, Value>,
    #[serde(default)]
    pub(super) languages: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CountryNameDto {
    pub(super) common: String,
}

impl CountryDto {
    pub(super) fn into_record(self) -> CountryRecord {
        let coordinates = match self.latlng.as_slice() {
            [latitude, longitude, ..] => Some(Coordinates::new(*latitude, *longitude)),
            _ => None,
        };
        let currency = self
            .currencies
            .values()
            .find_map(|currency| currency.get("name").and_then(Value::as_str))
            .map(str::to_owned);
        let language = self
            .languages
            .values()
            .find_map(Value::as_str)
            .map(str::to_owned);
        CountryRecord {
            name: self.name.common,
            capital: self.capital.into_iter().next(),
            coordinates,
            population: self.population,
            currency,
            language,
        }
    }
}
