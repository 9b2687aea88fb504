//! Reqwest-backed country directory source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::dto::CountryDto;
use crate::domain::ports::{CountryRecord, CountrySource, UpstreamError};
use crate::outbound::http::{JsonFetcher, decode, endpoint};

const PROVIDER: &str = "rest-countries";
const COUNTRY_FIELDS: &str = "name,capital,latlng,flags,population,currencies,languages";

/// Country directory over REST Countries.
pub struct RestCountriesSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: Url,
    timeout: Duration,
}

impl RestCountriesSource {
    /// Build a source rooted at `base_url`, for example
    /// `https://restcountries.com/v3.1`.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: Url, timeout: Duration) -> Self {
        Self {
            fetcher,
            base_url,
            timeout,
        }
    }

    async fn fetch_countries(&self, segments: &[&str]) -> Result<Vec<CountryRecord>, UpstreamError> {
        let url = endpoint(&self.base_url, segments, &[("fields", COUNTRY_FIELDS)])?;
        let body = self.fetcher.fetch_json(url, self.timeout).await?;
        let countries: Vec<CountryDto> = decode(body, PROVIDER)?;
        Ok(countries.into_iter().map(CountryDto::into_record).collect())
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    async fn all_countries(&self) -> Result<Vec<CountryRecord>, UpstreamError> {
        self.fetch_countries(&["all"]).await
    }

    async fn countries_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, UpstreamError> {
        let countries = self
            .fetch_countries(&["name", name])
            .await
            .map_err(|error| match error {
                UpstreamError::HttpStatus { status: 404 } => {
                    UpstreamError::not_found(format!("no country named {name}"))
                }
                other => other,
            })?;
        if countries.is_empty() {
            return Err(UpstreamError::not_found(format!("no country named {name}")));
        }
        Ok(countries)
    }
}
