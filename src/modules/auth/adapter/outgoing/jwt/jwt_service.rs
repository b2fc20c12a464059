use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);
        validation
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_session_token(&self, user_id: UserId, role: Role) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.session_token_expiry);

        let claims = SessionClaims {
            sub: user_id.value(),
            role,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: unexpected issuer");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!(error = %e, "Token verification failed: malformed token");
                    TokenError::MalformedToken
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "river-pulse-test".to_string(),
            session_token_expiry: expiry,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtTokenService::new(config(3600));
        let user_id = UserId::from(Uuid::new_v4());

        let issued = service
            .issue_session_token(user_id, Role::HealthOfficial)
            .unwrap();
        let claims = service.verify_session_token(&issued.token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.role, Role::HealthOfficial);
        assert_eq!(claims.iss, "river-pulse-test");
        assert_eq!(claims.expires_at().timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let service = JwtTokenService::new(config(3600));
        let user_id = UserId::from(Uuid::new_v4());

        let a = service.issue_session_token(user_id, Role::Admin).unwrap();
        let b = service.issue_session_token(user_id, Role::Admin).unwrap();

        let ja = service.verify_session_token(&a.token).unwrap().jti;
        let jb = service.verify_session_token(&b.token).unwrap().jti;
        assert_ne!(ja, jb);
    }

    #[test]
    fn test_expired_token() {
        // beyond the 30s leeway
        let service = JwtTokenService::new(config(-35));
        let issued = service
            .issue_session_token(UserId::from(Uuid::new_v4()), Role::Admin)
            .unwrap();

        let result = service.verify_session_token(&issued.token);

        assert_eq!(result.unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_invalid_signature() {
        let service = JwtTokenService::new(config(3600));
        let issued = service
            .issue_session_token(UserId::from(Uuid::new_v4()), Role::Admin)
            .unwrap();

        let mut other = config(3600);
        other.secret_key = format!("{}_DIFFERENT", other.secret_key);
        let result = JwtTokenService::new(other).verify_session_token(&issued.token);

        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let service = JwtTokenService::new(config(3600));
        let issued = service
            .issue_session_token(UserId::from(Uuid::new_v4()), Role::Admin)
            .unwrap();

        let mut other = config(3600);
        other.issuer = "someone-else".to_string();
        let result = JwtTokenService::new(other).verify_session_token(&issued.token);

        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_garbage_token() {
        let service = JwtTokenService::new(config(3600));
        assert_eq!(
            service.verify_session_token("invalid.jwt.token").unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
