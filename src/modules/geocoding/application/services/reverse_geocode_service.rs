use async_trait::async_trait;
use tracing::warn;

use crate::modules::geocoding::application::domain::entities::{Coordinates, Place};
use crate::modules::geocoding::application::ports::incoming::use_cases::{
    ReverseGeocodeError, ReverseGeocodeUseCase,
};
use crate::modules::geocoding::application::ports::outgoing::Geocoder;

pub struct ReverseGeocodeService<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> ReverseGeocodeService<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }
}

#[async_trait]
impl<G> ReverseGeocodeUseCase for ReverseGeocodeService<G>
where
    G: Geocoder + Send + Sync,
{
    async fn execute(&self, at: Coordinates) -> Result<Place, ReverseGeocodeError> {
        self.geocoder
            .reverse(at)
            .await
            .map_err(|e| {
                warn!(error = %e, lat = at.latitude(), lon = at.longitude(), "Reverse geocoding failed");
                ReverseGeocodeError::Unavailable(e.to_string())
            })?
            .ok_or(ReverseGeocodeError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::geocoding::application::services::test_support::{place, FakeGeocoder};

    fn at() -> Coordinates {
        Coordinates::parse(Some("26.95"), Some("94.17")).unwrap()
    }

    #[tokio::test]
    async fn test_returns_place() {
        let service = ReverseGeocodeService::new(FakeGeocoder::with(vec![place("Majuli", 26.95, 94.17)]));

        let result = service.execute(at()).await.unwrap();

        assert_eq!(result.display_name, "Majuli");
    }

    #[tokio::test]
    async fn test_nothing_found() {
        let service = ReverseGeocodeService::new(FakeGeocoder::default());

        assert_eq!(service.execute(at()).await, Err(ReverseGeocodeError::NotFound));
    }

    #[tokio::test]
    async fn test_geocoder_failure() {
        let service = ReverseGeocodeService::new(FakeGeocoder::failing());

        assert!(matches!(
            service.execute(at()).await,
            Err(ReverseGeocodeError::Unavailable(_))
        ));
    }
}
