use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{optional, required, ConfigError};
use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpMode {
    /// Authenticated STARTTLS relay.
    Relay,
    /// Plain local catcher such as Mailpit. No credentials, no TLS.
    Local,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub mode: SmtpMode,
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: String,
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match optional("SMTP_MODE").as_deref() {
            None | Some("relay") => SmtpMode::Relay,
            Some("local") => SmtpMode::Local,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "SMTP_MODE",
                    reason: format!("expected 'relay' or 'local', got '{}'", other),
                })
            }
        };

        let (username, password) = match mode {
            SmtpMode::Relay => (
                Some(required("SMTP_USERNAME")?),
                Some(required("SMTP_PASSWORD")?),
            ),
            SmtpMode::Local => (None, None),
        };

        let port = optional("SMTP_PORT")
            .map(|raw| raw.trim().parse::<u16>())
            .transpose()
            .map_err(|e| ConfigError::Invalid {
                key: "SMTP_PORT",
                reason: e.to_string(),
            })?;

        Ok(Self {
            mode,
            host: required("SMTP_HOST")?,
            port,
            username,
            password,
            from_email: required("EMAIL_FROM")?,
        })
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailSendError> {
        let transport = match config.mode {
            SmtpMode::Relay => {
                let creds = Credentials::new(
                    config.username.clone().unwrap_or_default(),
                    config.password.clone().unwrap_or_default(),
                );
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| EmailSendError::Transport(e.to_string()))?
                    .credentials(creds);
                if let Some(port) = config.port {
                    builder = builder.port(port);
                }
                builder.build()
            }
            SmtpMode::Local => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                    .port(config.port.unwrap_or(1025))
                    .build()
            }
        };

        Ok(Self::new_with_mailer(Box::new(transport), &config.from_email))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("from: {}", e)))?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("to: {}", e)))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailSendError::BuildFailed(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(EmailSendError::Transport)
    }
}
