use actix_web::web;

use super::web::routes::{create_incident_handler, list_incidents_handler};

pub fn init_incident_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_incident_handler)
        .service(list_incidents_handler);
}
