use crate::config::{optional, parse_or, ConfigError};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
    pub accept_language: Option<String>,
}

impl GeocoderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = optional("GEOCODER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: optional("GEOCODER_USER_AGENT")
                .unwrap_or_else(|| format!("river-pulse/{}", env!("CARGO_PKG_VERSION"))),
            timeout_secs: parse_or("GEOCODER_TIMEOUT_SECS", 8)?,
            accept_language: optional("GEOCODER_ACCEPT_LANGUAGE"),
        })
    }

    pub fn reverse_url(&self) -> String {
        format!("{}/reverse", self.base_url)
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}
