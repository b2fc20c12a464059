mod admin_users;
mod current_user;
mod generate_otp;
mod logout_user;
mod register_user;
mod verify_otp;

// glob re-exports keep the utoipa `__path_*` items reachable
pub use admin_users::*;
pub use current_user::*;
pub use generate_otp::*;
pub use logout_user::*;
pub use register_user::*;
pub use verify_otp::*;
