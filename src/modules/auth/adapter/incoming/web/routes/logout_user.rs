use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::LogoutCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponseBody {
    #[schema(example = true)]
    pub logged_out: bool,
}

/// Logout
///
/// Revokes the presented session token until it would have expired and
/// clears the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session revoked", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing, invalid or revoked session", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.user_id;
    let command = LogoutCommand {
        token: user.token,
        user_id,
        expires_at: user.expires_at,
    };

    if let Err(e) = data.auth.logout.execute(command).await {
        error!(error = %e, user_id = %user_id, "Logout failed");
        return ApiResponse::internal_error();
    }

    info!(user_id = %user_id, "User logged out");

    let mut response = ApiResponse::success(LogoutResponseBody { logged_out: true });
    if let Err(e) = response.add_cookie(&data.session_cookie.clear()) {
        error!(error = %e, "Failed to clear session cookie");
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE_NAME;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::auth::application::services::LogoutUserService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_fakes::InMemoryRevocations;
    use crate::tests::support::auth_helper::{bearer_token, session_verifier_with};

    #[actix_web::test]
    async fn test_logout_revokes_token() {
        let revocations = InMemoryRevocations::default();
        let state = TestAppStateBuilder::default()
            .with_logout(Arc::new(LogoutUserService::new(Arc::new(revocations.clone()))))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(session_verifier_with(revocations))
                .service(logout_user_handler),
        )
        .await;
        let bearer = bearer_token(Uuid::new_v4(), Role::AshaWorker);

        let first = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, first).await;

        assert_eq!(resp.status(), 200);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE_NAME)
            .expect("removal cookie");
        assert_eq!(cleared.value(), "");

        // same token is now rejected by the extractor
        let second = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), 401);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn test_logout_requires_session() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(session_verifier_with(InMemoryRevocations::default()))
                .service(logout_user_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/auth/logout").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
    }
}
