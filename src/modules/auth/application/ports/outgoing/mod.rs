pub mod otp_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod token_revocation_repository;
pub mod user_query;
pub mod user_repository;

pub use otp_repository::{NewOtp, OtpRepository, OtpRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{IssuedToken, SessionClaims, TokenError, TokenProvider};
pub use token_revocation_repository::{TokenRevocationError, TokenRevocationRepository};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError};
