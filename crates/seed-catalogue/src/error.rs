//! Error types for the seed-catalogue crate.
//!
//! Loading is the only fallible step; once a [`crate::Catalogue`] exists every
//! lookup is total.

use thiserror::Error;

/// Errors that can occur when loading or validating a catalogue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogueError {
    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The catalogue contains no seed locations.
    #[error("catalogue contains no seed locations")]
    EmptySeedLocations,

    /// Two seed locations share the same identifier.
    #[error("duplicate seed location id '{id}'")]
    DuplicateSeedId {
        /// The repeated identifier.
        id: String,
    },

    /// A rating lies outside the 1 to 5 scale.
    #[error("rating {rating} for '{name}' is outside the 1-5 scale")]
    RatingOutOfRange {
        /// Country or seed location carrying the rating.
        name: String,
        /// The offending rating.
        rating: f64,
    },

    /// A featured country has no profile in the allow-list.
    #[error("featured country '{name}' has no country profile")]
    UnknownFeaturedCountry {
        /// The featured country name.
        name: String,
    },

    /// The gallery default key does not name a gallery entry.
    #[error("gallery default key '{key}' has no photo ids")]
    MissingGalleryDefault {
        /// The configured default key.
        key: String,
    },

    /// A gallery entry lists no photo ids.
    #[error("gallery entry '{key}' is empty")]
    EmptyGallery {
        /// The gallery key with no ids.
        key: String,
    },
}
