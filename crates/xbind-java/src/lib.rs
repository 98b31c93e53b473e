pub mod emitters;
pub mod generator;

pub use generator::{JavaConfig, JavaGenerator};
