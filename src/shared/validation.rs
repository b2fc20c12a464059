use serde::Serialize;
use utoipa::ToSchema;

/// A single field-level validation problem reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    #[schema(example = "disease")]
    pub field: String,
    #[schema(example = "disease is required")]
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
