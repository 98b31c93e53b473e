pub mod classpath;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod plugin;
pub mod transform;

pub use error::{ArgumentError, ConfigurationError, GeneratorError, PipelineError};
pub use pipeline::Pipeline;
pub use plugin::{Options, Plugin};

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a class model.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        model: &model::CodeModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
