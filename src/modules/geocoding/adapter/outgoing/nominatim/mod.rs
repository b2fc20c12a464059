mod nominatim_client;
mod nominatim_config;

pub use nominatim_client::NominatimGeocoder;
pub use nominatim_config::GeocoderConfig;
