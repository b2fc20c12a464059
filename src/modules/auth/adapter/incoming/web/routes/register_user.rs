use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registration payload. Fields are optional at the JSON level so that every
/// missing field is reported as its own validation issue.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    #[schema(example = "asha_meena")]
    pub username: Option<String>,
    #[schema(example = "meena@example.org")]
    pub email: Option<String>,
    #[schema(example = "riverbank42")]
    pub password: Option<String>,
    #[schema(example = "Meena Das")]
    pub full_name: Option<String>,
    /// Defaults to COMMUNITY_VOLUNTEER; ADMIN is rejected.
    #[schema(example = "ASHA_WORKER")]
    pub role: Option<String>,
    #[schema(example = "Majuli, Ward 4")]
    pub assigned_area: Option<String>,
}

/// Register a user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Role cannot be self-assigned", body = ErrorResponse),
        (status = 409, description = "Username or e-mail taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    register_user(req.into_inner(), &data).await
}

/// Field-worker path, same identity store.
#[post("/api/auth/report-register")]
pub async fn report_register_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    register_user(req.into_inner(), &data).await
}

async fn register_user(dto: RegisterUserRequest, data: &AppState) -> HttpResponse {
    let command = match RegisterUserCommand::new(
        dto.username.unwrap_or_default(),
        dto.email.unwrap_or_default(),
        dto.password.unwrap_or_default(),
        dto.full_name.unwrap_or_default(),
        dto.role,
        dto.assigned_area,
    ) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    info!(username = %command.username(), role = %command.role(), "Registration attempt");

    match data.auth.register.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(RegisterUserError::RoleNotAllowed(role)) => ApiResponse::forbidden(
            "ROLE_NOT_ALLOWED",
            &format!("Role {} cannot be self-assigned", role),
        ),
        Err(RegisterUserError::UserAlreadyExists) => ApiResponse::conflict(
            "USER_ALREADY_EXISTS",
            "Username or email is already registered",
        ),
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
