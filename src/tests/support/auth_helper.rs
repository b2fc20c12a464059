use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::SessionVerifier;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::{Role, UserId};
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::auth_fakes::{AnyActiveUser, InMemoryRevocations, InMemoryUserStore};

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "river-pulse-test".to_string(),
        session_token_expiry: 3600,
    })
}

pub fn session_verifier_with(revocations: InMemoryRevocations) -> web::Data<SessionVerifier> {
    web::Data::new(SessionVerifier::new(
        Arc::new(test_jwt_service()),
        Arc::new(revocations),
        Arc::new(AnyActiveUser),
    ))
}

/// Verifier that resolves session users against `users`.
pub fn session_verifier_for(users: InMemoryUserStore) -> web::Data<SessionVerifier> {
    web::Data::new(SessionVerifier::new(
        Arc::new(test_jwt_service()),
        Arc::new(InMemoryRevocations::default()),
        Arc::new(users),
    ))
}

pub fn test_session_verifier() -> web::Data<SessionVerifier> {
    session_verifier_with(InMemoryRevocations::default())
}

/// `Authorization` header value for a freshly signed session.
pub fn bearer_token(user_id: Uuid, role: Role) -> String {
    let issued = test_jwt_service()
        .issue_session_token(UserId::from(user_id), role)
        .expect("test token");
    format!("Bearer {}", issued.token)
}
