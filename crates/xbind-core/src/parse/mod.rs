pub mod model_file;

use crate::error::ParseError;
pub use model_file::{ClassSpec, FieldSpec, ModelFile};

/// Parse a model file from YAML.
pub fn from_yaml(input: &str) -> Result<ModelFile, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse a model file from JSON.
pub fn from_json(input: &str) -> Result<ModelFile, ParseError> {
    Ok(serde_json::from_str(input)?)
}
