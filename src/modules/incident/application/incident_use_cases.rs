use std::sync::Arc;

use crate::modules::incident::application::ports::incoming::use_cases::{
    CreateIncidentUseCase, ListIncidentsUseCase,
};

#[derive(Clone)]
pub struct IncidentUseCases {
    pub create: Arc<dyn CreateIncidentUseCase + Send + Sync>,
    pub list: Arc<dyn ListIncidentsUseCase + Send + Sync>,
}
