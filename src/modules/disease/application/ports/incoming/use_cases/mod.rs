pub mod get_disease;
pub mod list_diseases;

pub use get_disease::{GetDiseaseError, GetDiseaseUseCase};
pub use list_diseases::{ListDiseasesError, ListDiseasesUseCase};
