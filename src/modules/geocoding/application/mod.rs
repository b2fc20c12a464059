pub mod domain;
pub mod geocoding_use_cases;
pub mod ports;
pub mod services;
