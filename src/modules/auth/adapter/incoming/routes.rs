use actix_web::web;

use super::web::routes::{
    current_user_handler, generate_otp_handler, list_users_handler, logout_user_handler,
    register_user_handler, report_login_handler, report_register_handler,
    set_user_status_handler, verify_otp_handler,
};

pub fn init_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user_handler)
        .service(report_register_handler)
        .service(generate_otp_handler)
        .service(report_login_handler)
        .service(verify_otp_handler)
        .service(current_user_handler)
        .service(logout_user_handler)
        .service(list_users_handler)
        .service(set_user_status_handler);
}
