use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::disease::application::domain::entities::Disease;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Disease catalog
///
/// All diseases ordered by name.
#[utoipa::path(
    get,
    path = "/api/diseases",
    tag = "diseases",
    responses(
        (status = 200, description = "Disease catalog", body = inline(SuccessResponse<Vec<Disease>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/diseases")]
pub async fn list_diseases_handler(data: web::Data<AppState>) -> impl Responder {
    match data.diseases.list.execute().await {
        Ok(diseases) => ApiResponse::success(diseases),
        Err(e) => {
            error!(error = %e, "Failed to list diseases");
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
    use crate::modules::disease::application::services::ListDiseasesService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_list_diseases() {
        let state = TestAppStateBuilder::default()
            .with_list_diseases(Arc::new(ListDiseasesService::new(StaticDiseaseQuery::with(
                vec![disease("Typhoid"), disease("Cholera")],
            ))))
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_diseases_handler)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/diseases").to_request())
                .await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"][0]["name"], "Cholera");
        assert_eq!(json["data"][1]["slug"], "typhoid");
        assert!(json["data"][0]["symptoms"].is_array());
        assert!(json["data"][0]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn test_list_diseases_db_failure() {
        let state = TestAppStateBuilder::default()
            .with_list_diseases(Arc::new(ListDiseasesService::new(
                StaticDiseaseQuery::failing(),
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_diseases_handler)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/diseases").to_request())
                .await;

        assert_eq!(resp.status(), 500);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "An unexpected error occurred");
    }
}
