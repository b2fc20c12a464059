use async_trait::async_trait;

use crate::modules::geocoding::application::domain::entities::{Coordinates, Place};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeocoderError {
    #[error("Geocoder unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected geocoder response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `None` when the service knows no place at that point.
    async fn reverse(&self, at: Coordinates) -> Result<Option<Place>, GeocoderError>;

    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Place>, GeocoderError>;
}
