pub mod create_incident;
pub mod list_incidents;

pub use create_incident::{CreateIncidentCommand, CreateIncidentError, CreateIncidentUseCase};
pub use list_incidents::{ListIncidentsError, ListIncidentsUseCase};
