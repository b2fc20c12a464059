pub mod generative_model;

pub use generative_model::{GenerativeModel, ModelError, ModelRequest, TextStream};
