pub mod domain;
pub mod ports;
pub mod services;
pub mod sms_use_cases;
