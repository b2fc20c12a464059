use actix_web::web;

use super::web::routes::{reverse_geocode_handler, search_places_handler};

pub fn init_geocoding_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reverse_geocode_handler)
        .service(search_places_handler);
}
