use crate::classpath::{Classpath, TypeDecl};
use crate::error::ConfigurationError;
use crate::model::CodeModel;

/// Build-wide settings handed to plugins while parsing arguments and running.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub classpath: Classpath,
}

impl Options {
    pub fn new(classpath: Classpath) -> Self {
        Self { classpath }
    }
}

/// An extension that augments the class model after it is fully built.
///
/// The pipeline enables a plugin when it sees `-<option_name>` on the command
/// line, or when the plugin itself consumes an argument.
pub trait Plugin {
    /// Option name without the leading dash, e.g. `Xcommons-lang`.
    fn option_name(&self) -> &str;

    /// Usage text shown by `xbind usage`.
    fn usage(&self) -> String;

    /// Types the plugin adds to the classpath when it is registered.
    fn classpath_types(&self) -> Vec<TypeDecl> {
        Vec::new()
    }

    /// Inspect `args[i]` and return how many tokens were consumed (0 if not ours).
    fn parse_argument(
        &mut self,
        options: &Options,
        args: &[String],
        i: usize,
    ) -> Result<usize, ConfigurationError> {
        let _ = (options, args, i);
        Ok(0)
    }

    /// Called once per build. Returning `false` aborts the build.
    fn run(&mut self, model: &mut CodeModel, options: &Options) -> bool;
}
