mod reverse_geocode;
mod search_places;

pub use reverse_geocode::*;
pub use search_places::*;
