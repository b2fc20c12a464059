use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::SMS_SENDERS;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::sms::application::ports::incoming::use_cases::{
    AlertDispatch, SendAlertCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SendAlertRequest {
    #[schema(example = "Cholera")]
    pub disease_type: Option<String>,
    #[schema(example = "MODERATE")]
    pub severity: Option<String>,
    #[schema(example = 12)]
    pub affected_count: Option<i64>,
    #[schema(example = "Majuli ward 4")]
    pub location: Option<String>,
    #[schema(example = "Boil drinking water before use")]
    pub action_required: Option<String>,
    #[schema(example = json!(["+919812345678"]))]
    pub recipients: Option<Vec<String>>,
}

/// Broadcast an outbreak alert by SMS
#[utoipa::path(
    post,
    path = "/api/sms",
    tag = "sms",
    security(("BearerAuth" = [])),
    request_body = SendAlertRequest,
    responses(
        (status = 201, description = "Alert dispatched, per-recipient results included", body = inline(SuccessResponse<AlertDispatch>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Role not allowed to send alerts", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/sms")]
pub async fn send_alert_handler(
    user: AuthenticatedUser,
    req: web::Json<SendAlertRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_any_role(SMS_SENDERS) {
        return resp;
    }

    let dto = req.into_inner();
    let command = match SendAlertCommand::new(
        dto.disease_type,
        dto.severity,
        dto.affected_count,
        dto.location,
        dto.action_required,
        dto.recipients,
    ) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    match data
        .sms
        .send_alert
        .execute(command, Some(user.user_id.value()))
        .await
    {
        Ok(dispatch) => ApiResponse::created(dispatch),
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to record SMS alert");
            ApiResponse::internal_error()
        }
    }
}
