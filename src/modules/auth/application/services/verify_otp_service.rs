use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifiedSession, VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    OtpRepository, TokenProvider, UserQuery, UserRepository,
};

pub struct VerifyOtpService<Q, R, O>
where
    Q: UserQuery,
    R: UserRepository,
    O: OtpRepository,
{
    users: Q,
    repository: R,
    otps: O,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R, O> VerifyOtpService<Q, R, O>
where
    Q: UserQuery,
    R: UserRepository,
    O: OtpRepository,
{
    pub fn new(
        users: Q,
        repository: R,
        otps: O,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            users,
            repository,
            otps,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R, O> VerifyOtpUseCase for VerifyOtpService<Q, R, O>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    async fn execute(&self, command: VerifyOtpCommand) -> Result<VerifiedSession, VerifyOtpError> {
        let now = Utc::now();

        let otp = self
            .otps
            .find_latest_matching(command.user_id(), command.email(), command.code())
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::InvalidOtp)?;

        if !otp.is_redeemable(now) {
            warn!(
                user_id = %command.user_id(),
                used = otp.is_used,
                expired = otp.is_expired(now),
                "OTP rejected"
            );
            return Err(VerifyOtpError::InvalidOtp);
        }

        let mut user = self
            .users
            .find_by_id(command.user_id())
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::InvalidOtp)?;

        if !user.is_active {
            return Err(VerifyOtpError::AccountInactive);
        }

        // A concurrent verification may have consumed the code first.
        let consumed = self
            .otps
            .mark_used(otp.id)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;
        if !consumed {
            return Err(VerifyOtpError::InvalidOtp);
        }

        self.repository
            .record_login(user.user_id(), now)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;
        user.last_login_at = Some(now);

        let issued = self
            .tokens
            .issue_session_token(user.user_id(), user.role)
            .map_err(|e| VerifyOtpError::TokenIssueFailed(e.to_string()))?;

        info!(user_id = %user.id, "Session issued");

        Ok(VerifiedSession {
            user: user.to_view(),
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
