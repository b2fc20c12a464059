use crate::config::{optional, parse_or, required, ConfigError};

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_SESSION_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT settings. `JWT_SECRET` has no fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        let session_token_expiry = parse_or("JWT_SESSION_EXPIRY", DEFAULT_SESSION_EXPIRY_SECS)?;
        if session_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: optional("JWT_ISSUER").unwrap_or_else(|| "river-pulse".to_string()),
            session_token_expiry,
        })
    }
}
