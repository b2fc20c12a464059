use actix_web::{get, patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::{AuthenticatedUser, ADMIN_ONLY};
use crate::modules::auth::application::domain::entities::{UserId, UserView};
use crate::modules::auth::application::ports::incoming::use_cases::{
    SetUserStatusCommand, SetUserStatusError,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageRequest};
use crate::shared::validation::ValidationIssue;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SetUserStatusRequest {
    #[schema(example = false)]
    pub is_active: Option<bool>,
}

/// List users (admin)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("perPage" = Option<u32>, Query, description = "Page size, at most 200"),
    ),
    responses(
        (status = 200, description = "Page of users"),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_any_role(ADMIN_ONLY) {
        return resp;
    }

    let page = PageRequest::from(query.into_inner());

    match data.auth.list_users.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

/// Activate or deactivate a user (admin)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = SetUserStatusRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Validation failed or self-deactivation", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/users/{id}/status")]
pub async fn set_user_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SetUserStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_any_role(ADMIN_ONLY) {
        return resp;
    }

    let Some(is_active) = req.is_active else {
        return ApiResponse::validation_failed(vec![ValidationIssue::new(
            "isActive",
            "isActive is required",
        )]);
    };

    let command = SetUserStatusCommand {
        actor: user.user_id,
        target: UserId::from(path.into_inner()),
        is_active,
    };
    let target = command.target;

    match data.auth.set_user_status.execute(command).await {
        Ok(view) => {
            info!(admin = %user.user_id, target = %target, is_active, "User status changed");
            ApiResponse::success(view)
        }
        Err(SetUserStatusError::CannotDeactivateSelf) => ApiResponse::bad_request(
            "CANNOT_DEACTIVATE_SELF",
            "Administrators cannot deactivate themselves",
        ),
        Err(SetUserStatusError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, target = %target, "Failed to change user status");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;

    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::auth::application::services::{ListUsersService, SetUserStatusService};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_fakes::{sample_user, InMemoryUserStore};
    use crate::tests::support::auth_helper::{
        bearer_token, session_verifier_for, test_session_verifier,
    };

    fn state(users: InMemoryUserStore) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_list_users(Arc::new(ListUsersService::new(users.clone())))
            .with_set_user_status(Arc::new(SetUserStatusService::new(users)))
            .build()
    }

    #[actix_web::test]
    async fn test_admin_lists_users() {
        let admin = sample_user("root", Role::Admin);
        let users = InMemoryUserStore::with_users(vec![
            admin.clone(),
            sample_user("meena", Role::AshaWorker),
            sample_user("ravi", Role::ClinicStaff),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(state(users))
                .app_data(test_session_verifier())
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users?page=1&perPage=2")
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["total"], 3);
        assert_eq!(json["data"]["perPage"], 2);
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_community_volunteer_is_denied_admin_routes() {
        let volunteer = sample_user("vol", Role::CommunityVolunteer);
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::with_users(vec![volunteer.clone()])))
                .app_data(test_session_verifier())
                .service(list_users_handler)
                .service(set_user_status_handler),
        )
        .await;

        let list = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", bearer_token(volunteer.id, volunteer.role)))
            .to_request();
        let resp = test::call_service(&app, list).await;
        assert_eq!(resp.status(), 403);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "FORBIDDEN");

        let patch = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/status", volunteer.id))
            .insert_header(("Authorization", bearer_token(volunteer.id, volunteer.role)))
            .set_json(serde_json::json!({ "isActive": false }))
            .to_request();
        let resp = test::call_service(&app, patch).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_admin_deactivates_user() {
        let admin = sample_user("root", Role::Admin);
        let target = sample_user("meena", Role::AshaWorker);
        let users = InMemoryUserStore::with_users(vec![admin.clone(), target.clone()]);
        let app = test::init_service(
            App::new()
                .app_data(state(users.clone()))
                .app_data(test_session_verifier())
                .service(set_user_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/status", target.id))
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .set_json(serde_json::json!({ "isActive": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["isActive"], false);
        assert!(!users.all().iter().find(|u| u.id == target.id).unwrap().is_active);
    }

    #[actix_web::test]
    async fn test_admin_cannot_deactivate_self() {
        let admin = sample_user("root", Role::Admin);
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::with_users(vec![admin.clone()])))
                .app_data(test_session_verifier())
                .service(set_user_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/status", admin.id))
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .set_json(serde_json::json!({ "isActive": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "CANNOT_DEACTIVATE_SELF");
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let admin = sample_user("root", Role::Admin);
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::with_users(vec![admin.clone()])))
                .app_data(test_session_verifier())
                .service(set_user_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/status", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .set_json(serde_json::json!({ "isActive": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_missing_is_active_is_validation_error() {
        let admin = sample_user("root", Role::Admin);
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::with_users(vec![admin.clone()])))
                .app_data(test_session_verifier())
                .service(set_user_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/status", admin.id))
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["issues"][0]["field"], "isActive");
    }

    #[actix_web::test]
    async fn test_deactivated_admin_loses_access_with_live_token() {
        let mut admin = sample_user("root", Role::Admin);
        admin.is_active = false;
        let users = InMemoryUserStore::with_users(vec![admin.clone()]);
        let app = test::init_service(
            App::new()
                .app_data(state(users.clone()))
                .app_data(session_verifier_for(users))
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", bearer_token(admin.id, Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "ACCOUNT_INACTIVE");
    }
}
