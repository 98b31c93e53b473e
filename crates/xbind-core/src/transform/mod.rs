pub mod file_to_model;
pub mod name_normalizer;

pub use file_to_model::transform;
