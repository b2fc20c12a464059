//! In-memory implementations of the auth outgoing ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::email::application::ports::outgoing::{OtpNotice, OtpNotificationError, OtpNotifier};
use crate::modules::auth::application::domain::entities::{OtpCode, Role, User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, HashError, IssuedToken, NewOtp, OtpRepository, OtpRepositoryError,
    PasswordHasher, SessionClaims, TokenError, TokenProvider, TokenRevocationError,
    TokenRevocationRepository, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

/// Active user whose password is `river123` under [`PlainHasher`].
pub fn sample_user(username: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@example.org", username.to_lowercase()),
        password_hash: "hashed:river123".to_string(),
        full_name: "Sample User".to_string(),
        role,
        assigned_area: None,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == data.username || u.email == data.email)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            full_name: data.full_name,
            role: data.role,
            assigned_area: data.assigned_area,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.last_login_at = Some(at);
        Ok(())
    }

    async fn set_active(
        &self,
        user_id: UserId,
        is_active: bool,
    ) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.is_active = is_active;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id.value())
            .cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserQueryError> {
        let users = self.users.lock().unwrap();
        let found = if identifier.contains('@') {
            let email = identifier.to_lowercase();
            users.iter().find(|u| u.email == email)
        } else {
            users.iter().find(|u| u.username == identifier)
        };
        Ok(found.cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<User>, UserQueryError> {
        let mut users = self.all();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = users.len() as u64;
        let items = users
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResult::new(items, page, total))
    }
}

/// Resolves any id to an active volunteer; for handler tests that only
/// care about the token.
pub struct AnyActiveUser;

#[async_trait]
impl UserQuery for AnyActiveUser {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let mut user = sample_user("session_holder", Role::CommunityVolunteer);
        user.id = user_id.value();
        Ok(Some(user))
    }

    async fn find_by_identifier(&self, _identifier: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<User>, UserQueryError> {
        Ok(PageResult::new(Vec::new(), page, 0))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    codes: Arc<Mutex<Vec<OtpCode>>>,
}

impl InMemoryOtpStore {
    pub fn with_codes(codes: Vec<OtpCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn all(&self) -> Vec<OtpCode> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpStore {
    async fn replace_for_user(&self, otp: NewOtp) -> Result<OtpCode, OtpRepositoryError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| !(c.user_id == otp.user_id.value() && !c.is_used));
        let record = OtpCode {
            id: Uuid::new_v4(),
            user_id: otp.user_id.value(),
            email: otp.email,
            code: otp.code,
            is_used: false,
            expires_at: otp.expires_at,
            created_at: Utc::now(),
        };
        codes.push(record.clone());
        Ok(record)
    }

    async fn find_latest_matching(
        &self,
        user_id: UserId,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, OtpRepositoryError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id.value() && c.email == email && c.code == code)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_used(&self, otp_id: Uuid) -> Result<bool, OtpRepositoryError> {
        let mut codes = self.codes.lock().unwrap();
        match codes.iter_mut().find(|c| c.id == otp_id && !c.is_used) {
            Some(code) => {
                code.is_used = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Prefixes the password with `hashed:`.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

/// Issues `token-for-{user_id}` and accepts only tokens of that shape.
pub struct StaticTokenProvider;

impl TokenProvider for StaticTokenProvider {
    fn issue_session_token(&self, user_id: UserId, _role: Role) -> Result<IssuedToken, TokenError> {
        Ok(IssuedToken {
            token: format!("token-for-{}", user_id),
            expires_at: Utc::now() + Duration::days(7),
        })
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let sub = token
            .strip_prefix("token-for-")
            .and_then(|id| id.parse::<Uuid>().ok())
            .ok_or(TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();
        Ok(SessionClaims {
            sub,
            role: Role::CommunityVolunteer,
            iss: "test".to_string(),
            iat: now,
            nbf: now,
            exp: now + 3600,
            jti: Uuid::new_v4(),
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(recipient, code)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OtpNotifier for RecordingNotifier {
    async fn send_otp(&self, notice: OtpNotice<'_>) -> Result<(), OtpNotificationError> {
        if self.fail {
            return Err(OtpNotificationError::EmailSendingFailed(
                "smtp unreachable".to_string(),
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((notice.to.to_string(), notice.code.to_string()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRevocations {
    revoked: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    fail: bool,
}

impl InMemoryRevocations {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.revoked.lock().unwrap().contains_key(token_hash)
    }
}

#[async_trait]
impl TokenRevocationRepository for InMemoryRevocations {
    async fn revoke(
        &self,
        token_hash: &str,
        _user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError> {
        if self.fail {
            return Err(TokenRevocationError::StoreError("redis down".to_string()));
        }
        if expires_at <= Utc::now() {
            return Err(TokenRevocationError::AlreadyExpired);
        }
        self.revoked
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError> {
        if self.fail {
            return Err(TokenRevocationError::StoreError("redis down".to_string()));
        }
        Ok(self.contains(token_hash))
    }
}
