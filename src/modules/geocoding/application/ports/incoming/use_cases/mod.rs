pub mod reverse_geocode;
pub mod search_places;

pub use reverse_geocode::{ReverseGeocodeError, ReverseGeocodeUseCase};
pub use search_places::{SearchPlacesCommand, SearchPlacesError, SearchPlacesUseCase};
