//! Country directory adapter for the REST Countries v3.1 API.

mod dto;
mod http_source;

pub use http_source::RestCountriesSource;
