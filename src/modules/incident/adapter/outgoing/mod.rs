pub mod incident_query_postgres;
pub mod incident_repository_postgres;
pub mod sea_orm_entity;
