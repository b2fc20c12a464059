use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::nominatim_config::GeocoderConfig;
use crate::modules::geocoding::application::domain::entities::{Coordinates, Place};
use crate::modules::geocoding::application::ports::outgoing::{Geocoder, GeocoderError};

/// Nominatim returns coordinates as strings.
#[derive(Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl TryFrom<NominatimPlace> for Place {
    type Error = GeocoderError;

    fn try_from(raw: NominatimPlace) -> Result<Self, Self::Error> {
        let coordinate = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| GeocoderError::InvalidResponse(format!("bad coordinate '{}'", value)))
        };

        Ok(Place {
            latitude: coordinate(&raw.lat)?,
            longitude: coordinate(&raw.lon)?,
            display_name: raw.display_name,
        })
    }
}

/// Reverse answers are either a place or `{"error": "Unable to geocode"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReverseReply {
    Found(NominatimPlace),
    Missing { error: String },
}

#[derive(Clone, Debug)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    config: GeocoderConfig,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocoderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocoderError::Unavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, GeocoderError> {
        let mut request = self.client.get(url).query(params);
        if let Some(lang) = &self.config.accept_language {
            request = request.header(ACCEPT_LANGUAGE, lang);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GeocoderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocoderError::Unavailable(format!("upstream returned {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GeocoderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, at: Coordinates) -> Result<Option<Place>, GeocoderError> {
        let reply: ReverseReply = self
            .get_json(
                self.config.reverse_url(),
                &[
                    ("format", "jsonv2".to_string()),
                    ("lat", at.latitude().to_string()),
                    ("lon", at.longitude().to_string()),
                ],
            )
            .await?;

        match reply {
            ReverseReply::Found(place) => Ok(Some(place.try_into()?)),
            ReverseReply::Missing { error } => {
                debug!(reason = %error, "Nothing found for reverse lookup");
                Ok(None)
            }
        }
    }

    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Place>, GeocoderError> {
        let raw: Vec<NominatimPlace> = self
            .get_json(
                self.config.search_url(),
                &[
                    ("format", "jsonv2".to_string()),
                    ("q", query.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        raw.into_iter().map(Place::try_from).collect()
    }
}
