//! Nearby attraction record.

use serde::Serialize;

/// A point of interest near a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place {
    /// Provider identifier.
    pub id: String,
    /// Display name; may be empty when the provider has none.
    pub name: String,
    /// First category from the provider's comma-separated kinds.
    #[serde(rename = "type")]
    pub kind: String,
    /// Distance from the query point in whole metres.
    pub distance: u32,
}
