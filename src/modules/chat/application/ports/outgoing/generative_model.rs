use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::modules::chat::application::domain::entities::ChatImage;

/// Text chunks as the provider produces them.
pub type TextStream = BoxStream<'static, Result<String, ModelError>>;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub system_prompt: String,
    pub message: Option<String>,
    pub image: Option<ChatImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Model rate limited: {0}")]
    RateLimited(String),

    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Model misconfigured: {0}")]
    Misconfigured(String),

    #[error("Content blocked: {0}")]
    Blocked(String),

    #[error("Model error: {0}")]
    Other(String),
}

impl ModelError {
    /// Maps a provider error description onto a category by keyword.
    pub fn from_provider_message(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let lower = detail.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

        if has(&["quota", "rate limit", "rate-limit", "resource_exhausted", "429"]) {
            Self::RateLimited(detail)
        } else if has(&["overloaded", "unavailable", "503"]) {
            Self::Unavailable(detail)
        } else if has(&["api key", "api_key", "permission", "unauthenticated", "403"]) {
            Self::Misconfigured(detail)
        } else if has(&["safety", "blocked"]) {
            Self::Blocked(detail)
        } else {
            Self::Other(detail)
        }
    }

    /// Wording safe to show to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimited(_) => "The assistant is receiving too many requests. Please try again shortly.",
            Self::Unavailable(_) => "The assistant is temporarily unavailable. Please try again later.",
            Self::Misconfigured(_) => "The assistant is not configured correctly. Please contact support.",
            Self::Blocked(_) => "This request could not be answered because it was flagged by the safety filter.",
            Self::Other(_) => "The assistant could not complete the answer. Please try again.",
        }
    }
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Fails before the stream starts for request-level errors; errors that
    /// occur mid-answer arrive as stream items.
    async fn stream(&self, request: ModelRequest) -> Result<TextStream, ModelError>;
}
