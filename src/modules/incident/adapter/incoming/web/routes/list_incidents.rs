use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageRequest};
use crate::AppState;

/// Reported incidents, newest first
#[utoipa::path(
    get,
    path = "/api/incidents",
    tag = "incidents",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("perPage" = Option<u32>, Query, description = "Page size, at most 200"),
    ),
    responses(
        (status = 200, description = "Page of incidents ordered by createdAt descending"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/incidents")]
pub async fn list_incidents_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::from(query.into_inner());

    match data.incidents.list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list incidents");
            ApiResponse::internal_error()
        }
    }
}
