use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("invalid class name: {0}")]
    InvalidName(String),

    #[error("invalid type: {0}")]
    InvalidType(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid package name: {0}")]
    InvalidPackage(String),

    #[error("field {class}.{field}: {source}")]
    InvalidFieldType {
        class: String,
        field: String,
        source: TypeError,
    },

    #[error("duplicate class: {0}")]
    DuplicateClass(String),

    #[error("duplicate field {field} in class {class}")]
    DuplicateField { class: String, field: String },
}

/// A plugin rejected its configuration. Aborts the build before any class is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConfigurationError(pub String);

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("unrecognized parameter {0}")]
    Unrecognized(String),

    #[error("bad command line: {0}")]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("plugin -{0} reported failure")]
    PluginFailed(String),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("duplicate method {signature} in class {class}")]
    DuplicateMethod { class: String, signature: String },

    #[error("class {class} references both {first} and {second}")]
    NameClash {
        class: String,
        first: String,
        second: String,
    },

    #[error("template error: {0}")]
    Template(String),
}
