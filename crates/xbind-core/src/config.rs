use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::classpath::{Classpath, TypeDecl};

/// Top-level project configuration loaded from `.xbind.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct XbindConfig {
    pub input: String,
    pub output: String,
    /// Emit Javadoc from model descriptions.
    pub javadoc: bool,
    /// Plugin arguments applied before any given on the command line.
    pub plugin_args: Vec<String>,
    /// Extra types visible to plugins, e.g. custom `toString` styles.
    pub classpath: Vec<TypeDecl>,
}

impl Default for XbindConfig {
    fn default() -> Self {
        Self {
            input: "model.yaml".to_string(),
            output: "generated".to_string(),
            javadoc: true,
            plugin_args: Vec::new(),
            classpath: Vec::new(),
        }
    }
}

impl XbindConfig {
    /// Default classpath extended with the configured declarations.
    pub fn build_classpath(&self) -> Classpath {
        Classpath::with_types(self.classpath.iter().cloned())
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".xbind.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<XbindConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: XbindConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# xbind configuration
input: model.yaml
output: generated
javadoc: true

plugin_args:
  - -Xcommons-lang
  # - -Xcommons-lang:ToStringStyle=SHORT_PREFIX_STYLE
  # - -Xcommons-lang:ToStringStyle=com.example.MyStyle

classpath: []
  # - name: com.example.MyStyle
  #   extends: org.apache.commons.lang3.builder.ToStringStyle
"#
}
