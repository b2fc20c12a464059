pub mod auth;

pub use auth::{AuthenticatedUser, SessionError, SessionVerifier, ADMIN_ONLY};
