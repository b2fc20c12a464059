mod list_sms;
mod receive_reply;
mod send_alert;

pub use list_sms::*;
pub use receive_reply::*;
pub use send_alert::*;

use crate::modules::auth::application::domain::entities::Role;

/// Roles allowed to broadcast alerts.
pub const SMS_SENDERS: &[Role] = &[Role::Admin, Role::ClinicStaff, Role::HealthOfficial];

/// Roles allowed to read alerts and replies.
pub const SMS_READERS: &[Role] = &[
    Role::Admin,
    Role::ClinicStaff,
    Role::HealthOfficial,
    Role::AshaWorker,
];
