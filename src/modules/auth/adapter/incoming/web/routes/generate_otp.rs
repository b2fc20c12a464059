use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    GenerateOtpCommand, GenerateOtpError, OtpChallenge,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOtpRequest {
    /// Username or e-mail address
    #[serde(alias = "username", alias = "email")]
    #[schema(example = "asha_meena")]
    pub identifier: Option<String>,
    #[schema(example = "riverbank42")]
    pub password: Option<String>,
}

/// Password login, step one
///
/// Checks the password and e-mails a 6-digit code valid for 10 minutes.
#[utoipa::path(
    post,
    path = "/api/auth/generate-otp",
    tag = "auth",
    request_body = GenerateOtpRequest,
    responses(
        (status = 200, description = "Code sent", body = inline(SuccessResponse<OtpChallenge>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account inactive", body = ErrorResponse),
        (status = 502, description = "E-mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/generate-otp")]
pub async fn generate_otp_handler(
    req: web::Json<GenerateOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    generate_otp(req.into_inner(), &data).await
}

#[post("/api/auth/report-login")]
pub async fn report_login_handler(
    req: web::Json<GenerateOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    generate_otp(req.into_inner(), &data).await
}

async fn generate_otp(dto: GenerateOtpRequest, data: &AppState) -> HttpResponse {
    let command = match GenerateOtpCommand::new(
        dto.identifier.unwrap_or_default(),
        dto.password.unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    info!(identifier = %command.identifier(), "OTP login attempt");

    match data.auth.generate_otp.execute(command).await {
        Ok(challenge) => ApiResponse::success(challenge),
        Err(GenerateOtpError::InvalidCredentials) => ApiResponse::unauthorized(
            "INVALID_CREDENTIALS",
            "Invalid username/email or password",
        ),
        Err(GenerateOtpError::AccountInactive) => {
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "This account has been deactivated")
        }
        Err(GenerateOtpError::DeliveryFailed(e)) => {
            error!(error = %e, "OTP e-mail could not be delivered");
            ApiResponse::bad_gateway(
                "OTP_DELIVERY_FAILED",
                "Could not send the login code, please try again",
            )
        }
        Err(e) => {
            error!(error = %e, "OTP generation failed");
            ApiResponse::internal_error()
        }
    }
}
