use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    GenerateOtpUseCase, GetCurrentUserUseCase, ListUsersUseCase, LogoutUserUseCase,
    RegisterUserUseCase, SetUserStatusUseCase, VerifyOtpUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub generate_otp: Arc<dyn GenerateOtpUseCase + Send + Sync>,
    pub verify_otp: Arc<dyn VerifyOtpUseCase + Send + Sync>,
    pub current_user: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUserUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub set_user_status: Arc<dyn SetUserStatusUseCase + Send + Sync>,
}
