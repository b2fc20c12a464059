use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::incoming::use_cases::GetCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Public view of the caller", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Missing, invalid or revoked session", body = ErrorResponse),
        (status = 403, description = "Account inactive", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetCurrentUserError::UserNotFound) => {
            ApiResponse::unauthorized("USER_NOT_FOUND", "Session user no longer exists")
        }
        Err(GetCurrentUserError::AccountInactive) => {
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "This account has been deactivated")
        }
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
