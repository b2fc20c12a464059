use actix_web::web;

use super::web::routes::chat_handler;

pub fn init_chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(chat_handler);
}
