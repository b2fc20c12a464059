use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::disease::application::domain::entities::Disease;
use crate::modules::disease::application::ports::incoming::use_cases::GetDiseaseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Disease by slug
#[utoipa::path(
    get,
    path = "/api/diseases/{slug}",
    tag = "diseases",
    params(("slug" = String, Path, description = "Disease slug, case-insensitive")),
    responses(
        (status = 200, description = "Disease found", body = inline(SuccessResponse<Disease>)),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/diseases/{slug}")]
pub async fn get_disease_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.diseases.get.execute(&slug).await {
        Ok(disease) => ApiResponse::success(disease),
        Err(GetDiseaseError::NotFound) => {
            ApiResponse::not_found("DISEASE_NOT_FOUND", "Disease not found")
        }
        Err(e) => {
            error!(error = %e, slug = %slug, "Failed to fetch disease");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;

    use crate::modules::disease::application::services::test_support::{
        disease, StaticDiseaseQuery,
    };
    use crate::modules::disease::application::services::GetDiseaseService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn state(query: StaticDiseaseQuery) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_get_disease(Arc::new(GetDiseaseService::new(query)))
            .build()
    }

    #[actix_web::test]
    async fn test_get_disease_case_insensitive() {
        let app = test::init_service(
            App::new()
                .app_data(state(StaticDiseaseQuery::with(vec![disease("Cholera")])))
                .service(get_disease_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/diseases/CHOLERA").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["name"], "Cholera");
    }

    #[actix_web::test]
    async fn test_get_disease_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(state(StaticDiseaseQuery::with(vec![disease("Cholera")])))
                .service(get_disease_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/diseases/malaria").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 404);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "DISEASE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_disease_db_failure() {
        let app = test::init_service(
            App::new()
                .app_data(state(StaticDiseaseQuery::failing()))
                .service(get_disease_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/diseases/cholera").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 500);
    }
}
