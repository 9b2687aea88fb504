//! Points-of-interest adapter for the OpenTripMap radius search.

mod dto;
mod http_source;

pub use http_source::OpenTripMapPlacesSource;
