use std::sync::Arc;

use crate::modules::disease::application::ports::incoming::use_cases::{
    GetDiseaseUseCase, ListDiseasesUseCase,
};

#[derive(Clone)]
pub struct DiseaseUseCases {
    pub list: Arc<dyn ListDiseasesUseCase + Send + Sync>,
    pub get: Arc<dyn GetDiseaseUseCase + Send + Sync>,
}
