//! `toString` style selection.
//!
//! A style name is first looked up among the built-in `ToStringStyle`
//! constants. Only a "no such field" outcome falls through to loading the
//! name as a custom style class from the classpath; any other lookup failure
//! is fatal.

use std::fmt;

use log::debug;
use thiserror::Error;
use xbind_core::ConfigurationError;
use xbind_core::classpath::{Classpath, OBJECT, TypeDecl};
use xbind_core::model::ClassName;

use crate::emitters::to_string_style;

/// The public style constants of commons-lang3 `ToStringStyle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinStyle {
    MultiLine,
    Default,
    NoFieldNames,
    ShortPrefix,
    Simple,
    NoClassName,
    Json,
}

impl BuiltinStyle {
    /// All built-in styles, the default first.
    pub const ALL: [BuiltinStyle; 7] = [
        BuiltinStyle::MultiLine,
        BuiltinStyle::Default,
        BuiltinStyle::NoFieldNames,
        BuiltinStyle::ShortPrefix,
        BuiltinStyle::Simple,
        BuiltinStyle::NoClassName,
        BuiltinStyle::Json,
    ];

    /// Constant name on `ToStringStyle`.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinStyle::MultiLine => "MULTI_LINE_STYLE",
            BuiltinStyle::Default => "DEFAULT_STYLE",
            BuiltinStyle::NoFieldNames => "NO_FIELD_NAMES_STYLE",
            BuiltinStyle::ShortPrefix => "SHORT_PREFIX_STYLE",
            BuiltinStyle::Simple => "SIMPLE_STYLE",
            BuiltinStyle::NoClassName => "NO_CLASS_NAME_STYLE",
            BuiltinStyle::Json => "JSON_STYLE",
        }
    }

    /// Case-sensitive exact match against the constant names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }
}

impl fmt::Display for BuiltinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved style used by generated `toString` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSelection {
    Named(BuiltinStyle),
    /// A user style class, instantiated with its no-arg constructor on every call.
    Custom(ClassName),
}

impl Default for StyleSelection {
    fn default() -> Self {
        StyleSelection::Named(BuiltinStyle::MultiLine)
    }
}

impl fmt::Display for StyleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSelection::Named(style) => write!(f, "{style}"),
            StyleSelection::Custom(class) => write!(f, "{class}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldLookupError {
    #[error("no such field: {0}")]
    NoSuchField(String),

    #[error("{0}")]
    AccessDenied(String),
}

/// Source of built-in style constants.
pub trait StyleCatalog {
    fn field(&self, name: &str) -> Result<BuiltinStyle, FieldLookupError>;
}

/// The constants shipped with commons-lang3.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl StyleCatalog for BuiltinCatalog {
    fn field(&self, name: &str) -> Result<BuiltinStyle, FieldLookupError> {
        BuiltinStyle::from_name(name).ok_or_else(|| FieldLookupError::NoSuchField(name.to_string()))
    }
}

/// Classpath entry for `ToStringStyle` itself. It is abstract, so it cannot
/// be selected as a custom style.
pub fn style_base() -> TypeDecl {
    TypeDecl::new(to_string_style().fqcn())
        .extends(OBJECT)
        .without_no_arg_constructor()
}

/// Resolve a raw style name to a built-in constant or a custom style class.
pub fn resolve_style(
    raw: &str,
    catalog: &dyn StyleCatalog,
    classpath: &Classpath,
) -> Result<StyleSelection, ConfigurationError> {
    match catalog.field(raw) {
        Ok(style) => {
            debug!("toString style {raw} is built in");
            return Ok(StyleSelection::Named(style));
        }
        Err(FieldLookupError::AccessDenied(message)) => {
            return Err(ConfigurationError(message));
        }
        Err(FieldLookupError::NoSuchField(_)) => {}
    }

    let decl = classpath
        .load_class(raw)
        .map_err(|e| ConfigurationError(e.to_string()))?;
    let base = to_string_style().fqcn();
    if !classpath.is_subtype(&decl.name, &base) {
        return Err(ConfigurationError(format!(
            "{} is not a subtype of {}",
            decl.name, base
        )));
    }
    if !decl.no_arg_constructor {
        return Err(ConfigurationError(format!(
            "{} has no public no-arg constructor",
            decl.name
        )));
    }
    let class = decl
        .class_name()
        .map_err(|e| ConfigurationError(e.to_string()))?;
    debug!("toString style {raw} resolved to custom class");
    Ok(StyleSelection::Custom(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DenyingCatalog;

    impl StyleCatalog for DenyingCatalog {
        fn field(&self, _name: &str) -> Result<BuiltinStyle, FieldLookupError> {
            Err(FieldLookupError::AccessDenied(
                "access denied to ToStringStyle fields".to_string(),
            ))
        }
    }

    fn classpath() -> Classpath {
        let base = to_string_style().fqcn();
        Classpath::with_types([
            style_base(),
            TypeDecl::new("com.example.MyStyle").extends(&base),
            TypeDecl::new("com.example.NotAStyle"),
            TypeDecl::new("com.example.NoCtorStyle")
                .extends(&base)
                .without_no_arg_constructor(),
        ])
    }

    #[test]
    fn test_every_builtin_resolves() {
        for style in BuiltinStyle::ALL {
            let resolved = resolve_style(style.name(), &BuiltinCatalog, &classpath()).unwrap();
            assert_eq!(resolved, StyleSelection::Named(style));
        }
    }

    #[test]
    fn test_default_is_multi_line() {
        assert_eq!(
            StyleSelection::default(),
            StyleSelection::Named(BuiltinStyle::MultiLine)
        );
        assert_eq!(StyleSelection::default().to_string(), "MULTI_LINE_STYLE");
    }

    #[test]
    fn test_builtin_match_is_case_sensitive() {
        assert_eq!(BuiltinStyle::from_name("simple_style"), None);
        let err = resolve_style("simple_style", &BuiltinCatalog, &classpath()).unwrap_err();
        assert_eq!(err.0, "class not found: simple_style");
    }

    #[test]
    fn test_custom_style_resolves() {
        let resolved = resolve_style("com.example.MyStyle", &BuiltinCatalog, &classpath()).unwrap();
        assert_eq!(
            resolved,
            StyleSelection::Custom(ClassName::new("com.example", "MyStyle"))
        );
    }

    #[test]
    fn test_unknown_style_fails() {
        let err = resolve_style("NoSuchStyle", &BuiltinCatalog, &classpath()).unwrap_err();
        assert_eq!(err, ConfigurationError("class not found: NoSuchStyle".to_string()));
    }

    #[test]
    fn test_access_denied_does_not_fall_through() {
        // MyStyle is loadable, but the catalog failure must win.
        let err = resolve_style("com.example.MyStyle", &DenyingCatalog, &classpath()).unwrap_err();
        assert_eq!(err.0, "access denied to ToStringStyle fields");
    }

    #[test]
    fn test_non_style_class_rejected() {
        let err =
            resolve_style("com.example.NotAStyle", &BuiltinCatalog, &classpath()).unwrap_err();
        assert_eq!(
            err.0,
            "com.example.NotAStyle is not a subtype of org.apache.commons.lang3.builder.ToStringStyle"
        );
    }

    #[test]
    fn test_missing_constructor_rejected() {
        let err =
            resolve_style("com.example.NoCtorStyle", &BuiltinCatalog, &classpath()).unwrap_err();
        assert!(err.0.contains("no public no-arg constructor"));
    }

    #[test]
    fn test_abstract_base_rejected() {
        let base = to_string_style().fqcn();
        let err = resolve_style(&base, &BuiltinCatalog, &classpath()).unwrap_err();
        assert!(err.0.contains("no public no-arg constructor"));
    }

    #[test]
    fn test_empty_name_is_not_loadable() {
        let err = resolve_style("", &BuiltinCatalog, &classpath()).unwrap_err();
        assert_eq!(err.0, "invalid class name: ");
    }
}
