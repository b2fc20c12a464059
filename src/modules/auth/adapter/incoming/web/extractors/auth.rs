use std::sync::Arc;

use actix_web::{
    dev::Payload, http::header, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;

use crate::modules::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE_NAME;
use crate::modules::auth::application::domain::entities::{Role, UserId};
use crate::modules::auth::application::ports::outgoing::{
    SessionClaims, TokenError, TokenProvider, TokenRevocationRepository, UserQuery,
};
use crate::modules::auth::application::services::token_hasher::hash_token;
use crate::shared::api::ApiResponse;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid session token: {0}")]
    Invalid(TokenError),

    #[error("Session token has been revoked")]
    Revoked,

    #[error("Revocation store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Session user no longer exists")]
    UserNotFound,

    #[error("Account has been deactivated")]
    AccountInactive,

    #[error("User lookup failed: {0}")]
    UserLookupFailed(String),
}

/// Verifies a session JWT, checks it against the revocation store and
/// confirms the account behind it is still active.
#[derive(Clone)]
pub struct SessionVerifier {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    revocations: Arc<dyn TokenRevocationRepository + Send + Sync>,
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl SessionVerifier {
    pub fn new(
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        revocations: Arc<dyn TokenRevocationRepository + Send + Sync>,
        users: Arc<dyn UserQuery + Send + Sync>,
    ) -> Self {
        Self {
            tokens,
            revocations,
            users,
        }
    }

    pub async fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let claims = self
            .tokens
            .verify_session_token(token)
            .map_err(SessionError::Invalid)?;

        match self.revocations.is_revoked(&hash_token(token)).await {
            Ok(false) => {}
            Ok(true) => return Err(SessionError::Revoked),
            Err(e) => return Err(SessionError::StoreUnavailable(e.to_string())),
        }

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await
            .map_err(|e| SessionError::UserLookupFailed(e.to_string()))?
            .ok_or(SessionError::UserNotFound)?;

        if !user.is_active {
            return Err(SessionError::AccountInactive);
        }

        Ok(claims)
    }
}

/// A caller holding a valid, unrevoked session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// `Err` carries the ready-made 403 response.
    pub fn require_any_role(&self, allowed: &[Role]) -> Result<(), HttpResponse> {
        if allowed.contains(&self.role) {
            return Ok(());
        }

        tracing::warn!(
            user_id = %self.user_id,
            role = %self.role,
            "Role not permitted for route"
        );
        Err(ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to access this resource",
        ))
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = req.app_data::<web::Data<SessionVerifier>>().cloned();
        let token = extract_session_token(req);

        Box::pin(async move {
            let verifier = verifier.ok_or_else(|| {
                tracing::error!("SessionVerifier is not registered as app data");
                create_api_error(ApiResponse::internal_error())
            })?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_SESSION",
                    "Authentication required",
                ))
            })?;

            match verifier.verify(&token).await {
                Ok(claims) => Ok(AuthenticatedUser {
                    user_id: claims.user_id(),
                    role: claims.role,
                    expires_at: claims.expires_at(),
                    token,
                }),
                Err(SessionError::Revoked) => Err(create_api_error(ApiResponse::unauthorized(
                    "TOKEN_REVOKED",
                    "Session has been revoked",
                ))),
                Err(SessionError::Invalid(_)) => Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired session",
                ))),
                Err(SessionError::StoreUnavailable(e)) => {
                    tracing::error!(error = %e, "Could not check token revocation");
                    Err(create_api_error(ApiResponse::service_unavailable(
                        "SESSION_STORE_UNAVAILABLE",
                        "Session store is unavailable",
                    )))
                }
                Err(SessionError::UserNotFound) => Err(create_api_error(ApiResponse::unauthorized(
                    "USER_NOT_FOUND",
                    "Session user no longer exists",
                ))),
                Err(SessionError::AccountInactive) => Err(create_api_error(ApiResponse::forbidden(
                    "ACCOUNT_INACTIVE",
                    "This account has been deactivated",
                ))),
                Err(SessionError::UserLookupFailed(e)) => {
                    tracing::error!(error = %e, "Could not load session user");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Session cookie first, then `Authorization: Bearer`.
pub fn extract_session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
