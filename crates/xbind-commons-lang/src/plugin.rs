use log::{debug, info};
use xbind_core::classpath::TypeDecl;
use xbind_core::model::CodeModel;
use xbind_core::{ConfigurationError, Options, Plugin};

use crate::emitters::attach_derived_methods;
use crate::style::{
    BuiltinCatalog, BuiltinStyle, StyleCatalog, StyleSelection, resolve_style, style_base,
};

pub const OPTION_NAME: &str = "Xcommons-lang";

/// Prefix of the style option; the rest of the token is the style name.
pub const TOSTRING_STYLE_PARAM: &str = "-Xcommons-lang:ToStringStyle=";

/// Generates `toString()`, `equals()` and `hashCode()` for every class using
/// the commons-lang3 reflection builders.
///
/// ```text
/// -Xcommons-lang
/// -Xcommons-lang:ToStringStyle=SIMPLE_STYLE
/// -Xcommons-lang:ToStringStyle=my.CustomToStringStyle
/// ```
///
/// A custom style must extend `ToStringStyle` and have a public no-arg
/// constructor. The default style is `MULTI_LINE_STYLE`.
pub struct CommonsLangPlugin {
    style: StyleSelection,
    catalog: Box<dyn StyleCatalog>,
}

impl Default for CommonsLangPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonsLangPlugin {
    pub fn new() -> Self {
        Self::with_catalog(Box::new(BuiltinCatalog))
    }

    pub fn with_catalog(catalog: Box<dyn StyleCatalog>) -> Self {
        Self {
            style: StyleSelection::default(),
            catalog,
        }
    }

    pub fn style(&self) -> &StyleSelection {
        &self.style
    }
}

impl Plugin for CommonsLangPlugin {
    fn option_name(&self) -> &str {
        OPTION_NAME
    }

    fn usage(&self) -> String {
        let mut usage = format!(
            "  -{OPTION_NAME}        :  generate toString(), hashCode() and equals() for generated code using commons-lang\n"
        );
        for (idx, style) in BuiltinStyle::ALL.iter().enumerate() {
            if idx == 0 {
                usage.push_str(&format!(" [{TOSTRING_STYLE_PARAM}{style}\n"));
            } else {
                usage.push_str(&format!("\t| {style}\n"));
            }
        }
        usage.push_str("\t| <Fully qualified class name of a ToStringStyle subtype>]\n");
        usage
    }

    fn classpath_types(&self) -> Vec<TypeDecl> {
        vec![style_base()]
    }

    fn parse_argument(
        &mut self,
        options: &Options,
        args: &[String],
        i: usize,
    ) -> Result<usize, ConfigurationError> {
        let Some(arg) = args.get(i) else {
            return Ok(0);
        };
        let Some(raw) = arg.trim().strip_prefix(TOSTRING_STYLE_PARAM) else {
            return Ok(0);
        };
        self.style = resolve_style(raw, self.catalog.as_ref(), &options.classpath)?;
        debug!("toString style set to {}", self.style);
        Ok(1)
    }

    fn run(&mut self, model: &mut CodeModel, _options: &Options) -> bool {
        for class in model.classes_mut() {
            debug!("adding toString/equals/hashCode to {}", class.name);
            attach_derived_methods(class, &self.style);
        }
        info!(
            "generated derived methods for {} classes with {}",
            model.classes.len(),
            self.style
        );
        true
    }
}
