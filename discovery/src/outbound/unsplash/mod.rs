//! Photo search adapter for the Unsplash API.

mod dto;
mod http_source;

pub use http_source::UnsplashPhotoSource;
