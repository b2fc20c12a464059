mod create_incident;
mod list_incidents;

pub use create_incident::*;
pub use list_incidents::*;
