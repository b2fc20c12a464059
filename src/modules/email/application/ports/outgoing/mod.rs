pub mod email_sender;
pub mod otp_notifier;

pub use email_sender::{EmailSendError, EmailSender};
pub use otp_notifier::{OtpNotice, OtpNotificationError, OtpNotifier};
