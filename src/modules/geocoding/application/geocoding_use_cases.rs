use std::sync::Arc;

use crate::modules::geocoding::application::ports::incoming::use_cases::{
    ReverseGeocodeUseCase, SearchPlacesUseCase,
};

#[derive(Clone)]
pub struct GeocodingUseCases {
    pub reverse: Arc<dyn ReverseGeocodeUseCase + Send + Sync>,
    pub search: Arc<dyn SearchPlacesUseCase + Send + Sync>,
}
