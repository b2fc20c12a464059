use async_trait::async_trait;

use crate::modules::geocoding::application::domain::entities::{Coordinates, Place};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReverseGeocodeError {
    #[error("No place found at these coordinates")]
    NotFound,

    #[error("Geocoder unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ReverseGeocodeUseCase: Send + Sync {
    async fn execute(&self, at: Coordinates) -> Result<Place, ReverseGeocodeError>;
}
