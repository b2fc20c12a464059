use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifiedSession, VerifyOtpCommand, VerifyOtpError,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::ValidationIssue;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyOtpRequest {
    pub user_id: Option<Uuid>,
    #[schema(example = "meena@example.org")]
    pub email: Option<String>,
    #[schema(example = "042917")]
    pub code: Option<String>,
}

/// Password login, step two
///
/// Redeems the e-mailed code and starts a session. The JWT is returned in the
/// body and set as the `river_pulse_session` cookie.
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Session started", body = inline(SuccessResponse<VerifiedSession>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Invalid, used or expired code", body = ErrorResponse),
        (status = 403, description = "Account inactive", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-otp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let missing_user_id = dto
        .user_id
        .is_none()
        .then(|| ValidationIssue::new("userId", "userId is required"));

    let command = match VerifyOtpCommand::new(
        dto.user_id.unwrap_or_default(),
        dto.email.unwrap_or_default(),
        dto.code.unwrap_or_default(),
    ) {
        Ok(cmd) if missing_user_id.is_none() => cmd,
        Ok(_) => return ApiResponse::validation_failed(missing_user_id.into_iter().collect()),
        Err(issues) => {
            let all = missing_user_id.into_iter().chain(issues).collect();
            return ApiResponse::validation_failed(all);
        }
    };

    match data.auth.verify_otp.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Session started");
            let cookie = data.session_cookie.issue(&session.token, session.expires_at);
            let mut response = ApiResponse::success(session);
            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            response
        }
        Err(VerifyOtpError::InvalidOtp) => {
            warn!("OTP verification rejected");
            ApiResponse::unauthorized("INVALID_OTP", "Invalid or expired code")
        }
        Err(VerifyOtpError::AccountInactive) => {
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "This account has been deactivated")
        }
        Err(e) => {
            error!(error = %e, "OTP verification failed");
            ApiResponse::internal_error()
        }
    }
}
