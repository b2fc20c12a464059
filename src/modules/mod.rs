pub mod auth;
pub mod chat;
pub mod disease;
pub mod email;
pub mod geocoding;
pub mod incident;
pub mod sms;
