// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Rejects malformed JSON bodies with the standard error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
