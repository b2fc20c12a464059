pub mod get_disease_service;
pub mod list_diseases_service;

pub use get_disease_service::GetDiseaseService;
pub use list_diseases_service::ListDiseasesService;
