//! Outbound adapters implementing domain ports for external providers.
//!
//! Adapters are thin translators between provider JSON and port records.
//! Every HTTP adapter goes through one [`http::JsonFetcher`] so deadlines
//! and status mapping are uniform.

pub mod cache;
pub mod http;
pub mod openweather;
pub mod opentripmap;
pub mod rest_countries;
pub mod unsplash;
