pub mod generate_otp;
pub mod get_current_user;
pub mod list_users;
pub mod logout_user;
pub mod register_user;
pub mod set_user_status;
pub mod verify_otp;

pub use generate_otp::{GenerateOtpCommand, GenerateOtpError, GenerateOtpUseCase, OtpChallenge};
pub use get_current_user::{GetCurrentUserError, GetCurrentUserUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use logout_user::{LogoutCommand, LogoutError, LogoutUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
pub use set_user_status::{SetUserStatusCommand, SetUserStatusError, SetUserStatusUseCase};
pub use verify_otp::{VerifiedSession, VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase};
