pub mod gateway;
pub mod sea_orm_entity;
pub mod sms_query_postgres;
pub mod sms_repository_postgres;
