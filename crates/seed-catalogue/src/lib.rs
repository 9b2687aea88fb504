//! Curated destination tables and the bundled fallback location dataset.
//!
//! The travel discovery core never trusts its upstream providers to be
//! available. Everything it needs to degrade gracefully lives here: the seed
//! locations shown when the country provider is down, the allow-list of
//! travel-relevant countries, the representative city, rating, description,
//! and image for each of them, and the fixed gallery photo ids used when the
//! photo provider is unconfigured.
//!
//! The data ships as JSON embedded at compile time and is validated when it
//! is loaded.
//!
//! # Example
//!
//! ```
//! use seed_catalogue::Catalogue;
//!
//! let catalogue = Catalogue::bundled().expect("bundled catalogue is valid");
//!
//! assert_eq!(catalogue.seed_locations().len(), 12);
//! assert_eq!(catalogue.city_for("Japan"), "Tokyo");
//! assert_eq!(catalogue.city_for("Atlantis"), "Atlantis");
//! ```

mod catalogue;
mod entries;
mod error;

pub use catalogue::{Catalogue, SUPPORTED_VERSION};
pub use entries::{CountryProfile, GalleryTable, SeedLocation};
pub use error::CatalogueError;
