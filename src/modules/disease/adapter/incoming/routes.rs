use actix_web::web;

use super::web::routes::{get_disease_handler, list_diseases_handler};

pub fn init_disease_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_diseases_handler).service(get_disease_handler);
}
