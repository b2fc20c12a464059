use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::geocoding::application::domain::entities::{Coordinates, Place};
use crate::modules::geocoding::application::ports::incoming::use_cases::ReverseGeocodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw values so malformed numbers become validation issues.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReverseGeocodeQuery {
    /// Latitude in degrees, -90 to 90
    pub lat: Option<String>,
    /// Longitude in degrees, -180 to 180
    pub lon: Option<String>,
}

/// Name the place at a point
#[utoipa::path(
    get,
    path = "/api/geocode/reverse",
    tag = "geocoding",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Place found", body = inline(SuccessResponse<Place>)),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse),
        (status = 404, description = "Nothing at this point", body = ErrorResponse),
        (status = 502, description = "Geocoder unavailable", body = ErrorResponse),
    )
)]
#[get("/api/geocode/reverse")]
pub async fn reverse_geocode_handler(
    query: web::Query<ReverseGeocodeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let at = match Coordinates::parse(query.lat.as_deref(), query.lon.as_deref()) {
        Ok(at) => at,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    match data.geocoding.reverse.execute(at).await {
        Ok(place) => ApiResponse::success(place),
        Err(ReverseGeocodeError::NotFound) => {
            ApiResponse::not_found("PLACE_NOT_FOUND", "No place found at these coordinates")
        }
        Err(ReverseGeocodeError::Unavailable(_)) => {
            ApiResponse::bad_gateway("GEOCODER_UNAVAILABLE", "Geocoding service unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;

    use crate::modules::geocoding::application::services::test_support::{place, FakeGeocoder};
    use crate::modules::geocoding::application::services::ReverseGeocodeService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn call(geocoder: FakeGeocoder, uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_reverse_geocode(Arc::new(ReverseGeocodeService::new(geocoder)))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(reverse_geocode_handler)).await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_reverse_found() {
        let resp = call(
            FakeGeocoder::with(vec![place("Majuli, Assam", 26.95, 94.17)]),
            "/api/geocode/reverse?lat=26.95&lon=94.17",
        )
        .await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["displayName"], "Majuli, Assam");
        assert_eq!(json["data"]["latitude"], 26.95);
    }

    #[actix_web::test]
    async fn test_invalid_coordinates() {
        let resp = call(FakeGeocoder::default(), "/api/geocode/reverse?lat=120&lon=abc").await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["issues"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_nothing_found() {
        let resp = call(FakeGeocoder::default(), "/api/geocode/reverse?lat=0&lon=0").await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_upstream_failure() {
        let resp = call(FakeGeocoder::failing(), "/api/geocode/reverse?lat=1&lon=1").await;

        assert_eq!(resp.status(), 502);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "GEOCODER_UNAVAILABLE");
    }
}
