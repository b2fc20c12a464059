use actix_web::web;

use super::web::routes::{list_sms_handler, receive_reply_handler, send_alert_handler};

pub fn init_sms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(send_alert_handler)
        .service(list_sms_handler)
        .service(receive_reply_handler);
}
