pub mod disease_query;

pub use disease_query::{DiseaseQuery, DiseaseQueryError};
