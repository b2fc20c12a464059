use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Read a required variable; blank values count as missing.
pub fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional variable, falling back to `default` when it is unset.
pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

pub fn flag(key: &'static str) -> Result<bool, ConfigError> {
    parse_or(key, false)
}

/// Process-level settings. Adapter-specific settings (JWT, SMTP, Gemini,
/// SMS gateway, geocoder) live next to their adapters.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub run_migrations: bool,
    pub cors_allowed_origin: Option<String>,
    pub cookie_secure: bool,
    pub sms_webhook_secret: Option<String>,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080)?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            run_migrations: flag("RUN_MIGRATIONS")?,
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
            cookie_secure: flag("COOKIE_SECURE")?,
            sms_webhook_secret: optional("SMS_WEBHOOK_SECRET"),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 20)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
pub fn load_env_files() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    env_name
}
