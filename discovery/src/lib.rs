//! Travel discovery core: aggregates country, weather, photo, and
//! attraction providers into traveller-facing records, degrading to
//! curated fallback data whenever a provider is slow, failing, or not
//! configured.
//!
//! Start with [`build_discovery`] for a production wiring, or assemble
//! [`TravelDiscovery`] from [`domain::DiscoveryPorts`] for tests.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod outbound;

#[cfg(test)]
mod test_support;

pub use bootstrap::{BootstrapError, build_discovery, build_discovery_with_fetcher};
pub use config::{ApiCredential, DiscoverySettings};
pub use domain::TravelDiscovery;
