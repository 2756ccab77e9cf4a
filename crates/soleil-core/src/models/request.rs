use serde::Serialize;
use tokio::time::Instant;

use super::Category;

/// A pseudo-random point inside the Paris bounding box, kept at fixed precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°N · {:.4}°E", self.lat, self.lng)
    }
}

/// One synthetic request in the feed. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request {
    pub id: u64,
    pub category: Category,
    pub neighborhood: &'static str,
    /// Only set for categories that name a venue
    pub venue: Option<&'static str>,
    pub score: u8,
    pub coordinates: Coordinates,
    #[serde(skip)]
    pub created_at: Instant,
}

impl Request {
    /// Display label: the venue when there is one, otherwise the neighborhood.
    pub fn location_label(&self) -> &'static str {
        self.venue.unwrap_or(self.neighborhood)
    }
}
