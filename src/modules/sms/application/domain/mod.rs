pub mod classifier;
pub mod entities;
