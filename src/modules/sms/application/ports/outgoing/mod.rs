pub mod sms_gateway;
pub mod sms_query;
pub mod sms_repository;

pub use sms_gateway::{SmsGateway, SmsGatewayError};
pub use sms_query::{SmsQuery, SmsQueryError};
pub use sms_repository::{NewSmsAlert, NewSmsResponse, SmsRepository, SmsRepositoryError};
