use log::debug;
use xbind_core::model::CodeModel;
use xbind_core::{CodeGenerator, GeneratedFile, GeneratorError};

use crate::emitters;

/// Options for Java rendering.
#[derive(Debug, Clone)]
pub struct JavaConfig {
    /// Emit Javadoc from model descriptions.
    pub javadoc: bool,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self { javadoc: true }
    }
}

/// Renders every class in the model to its own `.java` file.
pub struct JavaGenerator;

impl CodeGenerator for JavaGenerator {
    type Config = JavaConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        model: &CodeModel,
        config: &JavaConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        model
            .classes()
            .map(|class| {
                let path = emitters::source_path(class.name.package(), class.name.simple());
                debug!("rendering {path}");
                Ok(GeneratedFile {
                    path,
                    content: emitters::class::emit_class(class, config.javadoc)?,
                })
            })
            .collect()
    }
}
