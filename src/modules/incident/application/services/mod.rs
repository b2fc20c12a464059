pub mod create_incident_service;
pub mod list_incidents_service;

pub use create_incident_service::CreateIncidentService;
pub use list_incidents_service::ListIncidentsService;
