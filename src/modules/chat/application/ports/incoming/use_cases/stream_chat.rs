use async_trait::async_trait;

use crate::modules::chat::application::domain::entities::{
    is_allowed_image_type, ChatImage, MAX_IMAGE_BYTES, MAX_MESSAGE_LEN,
};
use crate::modules::chat::application::ports::outgoing::{ModelError, TextStream};
use crate::shared::validation::ValidationIssue;

/// One chat turn: text, an image, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCommand {
    message: Option<String>,
    image: Option<ChatImage>,
}

impl ChatCommand {
    pub fn new(
        message: Option<String>,
        image: Option<ChatImage>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(m) = &message {
            if m.chars().count() > MAX_MESSAGE_LEN {
                issues.push(ValidationIssue::new(
                    "message",
                    format!("message must be at most {} characters", MAX_MESSAGE_LEN),
                ));
            }
        }

        if let Some(img) = &image {
            if !is_allowed_image_type(&img.mime_type) {
                issues.push(ValidationIssue::new(
                    "image",
                    "image must be JPEG, PNG, WebP or GIF",
                ));
            }
            if img.data.is_empty() {
                issues.push(ValidationIssue::new("image", "image is empty"));
            } else if img.data.len() > MAX_IMAGE_BYTES {
                issues.push(ValidationIssue::new("image", "image must be at most 5 MiB"));
            }
        }

        if message.is_none() && image.is_none() {
            issues.push(ValidationIssue::new(
                "message",
                "message or image is required",
            ));
        }

        if issues.is_empty() {
            Ok(Self { message, image })
        } else {
            Err(issues)
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn image(&self) -> Option<&ChatImage> {
        self.image.as_ref()
    }

    pub fn into_parts(self) -> (Option<String>, Option<ChatImage>) {
        (self.message, self.image)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamChatError {
    #[error("Disease catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[async_trait]
pub trait StreamChatUseCase: Send + Sync {
    async fn execute(&self, command: ChatCommand) -> Result<TextStream, StreamChatError>;
}
