use async_trait::async_trait;
use tracing::warn;

use crate::modules::geocoding::application::domain::entities::Place;
use crate::modules::geocoding::application::ports::incoming::use_cases::{
    SearchPlacesCommand, SearchPlacesError, SearchPlacesUseCase,
};
use crate::modules::geocoding::application::ports::outgoing::Geocoder;

pub struct SearchPlacesService<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> SearchPlacesService<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }
}

#[async_trait]
impl<G> SearchPlacesUseCase for SearchPlacesService<G>
where
    G: Geocoder + Send + Sync,
{
    async fn execute(&self, command: SearchPlacesCommand) -> Result<Vec<Place>, SearchPlacesError> {
        let mut places = self
            .geocoder
            .search(command.query(), command.limit())
            .await
            .map_err(|e| {
                warn!(error = %e, query = %command.query(), "Place search failed");
                SearchPlacesError::Unavailable(e.to_string())
            })?;

        // upstream may ignore the limit
        places.truncate(command.limit() as usize);
        Ok(places)
    }
}
