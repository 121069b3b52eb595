//! Travel memory model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A travel memory pinned on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelMemory {
    /// Identifier, the creation timestamp in milliseconds.
    pub id: String,
    /// `[longitude, latitude]` position on the map.
    pub coordinates: [f64; 2],
    /// Short title shown on the pin.
    pub title: String,
    /// Free-text note.
    pub description: String,
    /// Free-form date label shown with the pin.
    pub date: String,
    /// When the memory was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl TravelMemory {
    /// Create a new memory pinned at the given coordinates.
    #[must_use]
    pub fn new(
        coordinates: [f64; 2],
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            coordinates,
            title: title.into(),
            description: description.into(),
            date: date.into(),
            created_at: now,
        }
    }
}
