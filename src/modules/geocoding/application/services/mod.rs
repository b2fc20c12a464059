pub mod reverse_geocode_service;
pub mod search_places_service;

pub use reverse_geocode_service::ReverseGeocodeService;
pub use search_places_service::SearchPlacesService;
