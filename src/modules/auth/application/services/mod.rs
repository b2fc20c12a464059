pub mod generate_otp_service;
pub mod get_current_user_service;
pub mod list_users_service;
pub mod logout_user_service;
pub mod register_user_service;
pub mod set_user_status_service;
pub mod token_hasher;
pub mod verify_otp_service;

pub use generate_otp_service::GenerateOtpService;
pub use get_current_user_service::GetCurrentUserService;
pub use list_users_service::ListUsersService;
pub use logout_user_service::LogoutUserService;
pub use register_user_service::RegisterUserService;
pub use set_user_status_service::SetUserStatusService;
pub use verify_otp_service::VerifyOtpService;
