use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use crate::email::application::ports::outgoing::{OtpNotice, OtpNotifier};
use crate::modules::auth::application::domain::entities::OtpCode;
use crate::modules::auth::application::ports::incoming::use_cases::{
    GenerateOtpCommand, GenerateOtpError, GenerateOtpUseCase, OtpChallenge,
};
use crate::modules::auth::application::ports::outgoing::{
    NewOtp, OtpRepository, PasswordHasher, UserQuery,
};

/// Uniform 6-digit code, leading zeros kept.
pub fn generate_otp_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", n)
}

pub struct GenerateOtpService<Q, O>
where
    Q: UserQuery,
    O: OtpRepository,
{
    users: Q,
    otps: O,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    notifier: Arc<dyn OtpNotifier + Send + Sync>,
}

impl<Q, O> GenerateOtpService<Q, O>
where
    Q: UserQuery,
    O: OtpRepository,
{
    pub fn new(
        users: Q,
        otps: O,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        notifier: Arc<dyn OtpNotifier + Send + Sync>,
    ) -> Self {
        Self {
            users,
            otps,
            hasher,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, O> GenerateOtpUseCase for GenerateOtpService<Q, O>
where
    Q: UserQuery + Send + Sync,
    O: OtpRepository + Send + Sync,
{
    async fn execute(&self, command: GenerateOtpCommand) -> Result<OtpChallenge, GenerateOtpError> {
        let user = self
            .users
            .find_by_identifier(command.identifier())
            .await
            .map_err(|e| GenerateOtpError::RepositoryError(e.to_string()))?
            .ok_or(GenerateOtpError::InvalidCredentials)?;

        let password_ok = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| GenerateOtpError::HashingFailed(e.to_string()))?;

        if !password_ok {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(GenerateOtpError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(GenerateOtpError::AccountInactive);
        }

        let otp = self
            .otps
            .replace_for_user(NewOtp {
                user_id: user.user_id(),
                email: user.email.clone(),
                code: generate_otp_code(),
                expires_at: OtpCode::expiry_from(Utc::now()),
            })
            .await
            .map_err(|e| GenerateOtpError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_otp(OtpNotice {
                to: &user.email,
                full_name: &user.full_name,
                code: &otp.code,
                expires_at: otp.expires_at,
            })
            .await
            .map_err(|e| GenerateOtpError::DeliveryFailed(e.to_string()))?;

        info!(user_id = %user.id, "OTP issued");

        Ok(OtpChallenge {
            user_id: user.id,
            email: user.email,
            expires_at: otp.expires_at,
        })
    }
}
