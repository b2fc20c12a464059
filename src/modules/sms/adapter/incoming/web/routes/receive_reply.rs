use actix_web::{put, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::sms::application::domain::entities::SmsResponse;
use crate::modules::sms::application::ports::incoming::use_cases::{
    ReceiveReplyCommand, ReceiveReplyError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const WEBHOOK_SECRET_HEADER: &str = "X-Webhook-Secret";

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiveReplyRequest {
    #[schema(example = "+919812345678")]
    pub phone: Option<String>,
    #[schema(example = "3 cases of diarrhea")]
    pub message: Option<String>,
    pub alert_id: Option<Uuid>,
}

/// Compares digests so the check does not stop at the first differing byte.
fn secret_matches(expected: &str, provided: Option<&str>) -> bool {
    let Some(provided) = provided else {
        return false;
    };
    Sha256::digest(expected.as_bytes()) == Sha256::digest(provided.as_bytes())
}

/// Inbound SMS reply webhook
#[utoipa::path(
    put,
    path = "/api/sms",
    tag = "sms",
    params(("X-Webhook-Secret" = Option<String>, Header, description = "Required when the server has a webhook secret configured")),
    request_body = ReceiveReplyRequest,
    responses(
        (status = 201, description = "Reply classified and stored", body = inline(SuccessResponse<SmsResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Webhook secret mismatch", body = ErrorResponse),
        (status = 404, description = "alertId does not match a sent alert", body = ErrorResponse),
    )
)]
#[put("/api/sms")]
pub async fn receive_reply_handler(
    http: HttpRequest,
    req: web::Json<ReceiveReplyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(expected) = data.sms_webhook_secret.as_deref() {
        let provided = http
            .headers()
            .get(WEBHOOK_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());
        if !secret_matches(expected, provided) {
            warn!(peer = ?http.peer_addr(), "SMS webhook called with a bad secret");
            return ApiResponse::unauthorized("INVALID_WEBHOOK_SECRET", "Webhook secret mismatch");
        }
    }

    let dto = req.into_inner();
    let command = match ReceiveReplyCommand::new(dto.phone, dto.message, dto.alert_id) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    match data.sms.receive_reply.execute(command).await {
        Ok(response) => ApiResponse::created(response),
        Err(ReceiveReplyError::UnknownAlert(_)) => {
            ApiResponse::not_found("ALERT_NOT_FOUND", "Referenced alert does not exist")
        }
        Err(e) => {
            error!(error = %e, "Failed to store SMS reply");
            ApiResponse::internal_error()
        }
    }
}
