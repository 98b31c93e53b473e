use serde::Deserialize;

/// Top-level model document: a package and the classes to generate into it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub description: Option<String>,
}
