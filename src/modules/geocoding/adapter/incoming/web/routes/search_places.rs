use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::geocoding::application::domain::entities::Place;
use crate::modules::geocoding::application::ports::incoming::use_cases::{
    SearchPlacesCommand, SearchPlacesError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchPlacesQuery {
    /// Free-text place name
    pub q: Option<String>,
    /// Result count, default 5, at most 10
    pub limit: Option<String>,
}

/// Find places by name
#[utoipa::path(
    get,
    path = "/api/geocode/search",
    tag = "geocoding",
    params(SearchPlacesQuery),
    responses(
        (status = 200, description = "Matching places", body = inline(SuccessResponse<Vec<Place>>)),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 502, description = "Geocoder unavailable", body = ErrorResponse),
    )
)]
#[get("/api/geocode/search")]
pub async fn search_places_handler(
    query: web::Query<SearchPlacesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let command = match SearchPlacesCommand::new(query.q, query.limit.as_deref()) {
        Ok(cmd) => cmd,
        Err(issues) => return ApiResponse::validation_failed(issues),
    };

    match data.geocoding.search.execute(command).await {
        Ok(places) => ApiResponse::success(places),
        Err(SearchPlacesError::Unavailable(_)) => {
            ApiResponse::bad_gateway("GEOCODER_UNAVAILABLE", "Geocoding service unavailable")
        }
    }
}
