pub mod sms_alerts;
pub mod sms_responses;
