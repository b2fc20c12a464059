pub mod incident_query;
pub mod incident_repository;

pub use incident_query::{IncidentQuery, IncidentQueryError};
pub use incident_repository::{IncidentRepository, IncidentRepositoryError, NewIncident};
