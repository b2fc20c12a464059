pub mod otp_codes;
pub mod users;
