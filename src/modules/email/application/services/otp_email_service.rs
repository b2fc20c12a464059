use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::email::application::ports::outgoing::{
    EmailSender, OtpNotice, OtpNotificationError, OtpNotifier,
};
use crate::modules::auth::application::domain::entities::OTP_TTL_MINUTES;

pub const OTP_SUBJECT: &str = "Your River Pulse login code";

#[derive(Clone)]
pub struct OtpEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for OtpEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl OtpEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_body(notice: &OtpNotice<'_>) -> String {
        format!(
            r#"<p>Hello {name},</p>
<p>Your River Pulse login code is:</p>
<p style="font-size:24px;font-weight:bold;letter-spacing:4px">{code}</p>
<p>The code expires in {ttl} minutes ({expires} UTC). If you did not try to sign in, you can ignore this email.</p>
<p>- River Pulse</p>"#,
            name = html_escape(notice.full_name),
            code = notice.code,
            ttl = OTP_TTL_MINUTES,
            expires = notice.expires_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[async_trait]
impl OtpNotifier for OtpEmailService {
    async fn send_otp(&self, notice: OtpNotice<'_>) -> Result<(), OtpNotificationError> {
        let body = Self::render_body(&notice);

        match self.sender.send_email(notice.to, OTP_SUBJECT, &body).await {
            Ok(()) => {
                info!(to = %notice.to, "OTP email sent");
                Ok(())
            }
            Err(e) => {
                error!(to = %notice.to, error = %e, "Failed to send OTP email");
                Err(OtpNotificationError::EmailSendingFailed(e.to_string()))
            }
        }
    }
}
