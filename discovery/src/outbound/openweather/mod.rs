//! Current-weather adapter for the OpenWeatherMap 2.5 API.

mod dto;
mod http_source;

pub use http_source::OpenWeatherSource;
