use bytes::Bytes;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_MESSAGE_LEN: usize = 4000;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Image attached to a chat turn, forwarded inline to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatImage {
    pub mime_type: String,
    pub data: Bytes,
}

pub fn is_allowed_image_type(mime_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(mime_type.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_types() {
        assert!(is_allowed_image_type("image/png"));
        assert!(is_allowed_image_type("IMAGE/JPEG"));
        assert!(!is_allowed_image_type("image/svg+xml"));
        assert!(!is_allowed_image_type("application/pdf"));
    }
}
