//! Registry of types visible to the build, standing in for a class loader.
//!
//! Plugins resolve user-supplied type names here. A type is "loadable" when it
//! has been declared, either by default, by a registered plugin, or through
//! the `classpath` section of the project config.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::model::ClassName;

/// Root of every type chain.
pub const OBJECT: &str = "java.lang.Object";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("class not found: {0}")]
    ClassNotFound(String),

    #[error("invalid class name: {0}")]
    InvalidName(String),
}

/// A type declared on the classpath.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default = "default_true")]
    pub no_arg_constructor: bool,
}

fn default_true() -> bool {
    true
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            no_arg_constructor: true,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn without_no_arg_constructor(mut self) -> Self {
        self.no_arg_constructor = false;
        self
    }

    pub fn class_name(&self) -> Result<ClassName, LoadError> {
        ClassName::parse(&self.name).map_err(|_| LoadError::InvalidName(self.name.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct Classpath {
    types: IndexMap<String, TypeDecl>,
}

impl Default for Classpath {
    fn default() -> Self {
        let mut classpath = Self::empty();
        classpath.register(TypeDecl::new(OBJECT));
        classpath
    }
}

impl Classpath {
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Default classpath plus the given declarations.
    pub fn with_types(decls: impl IntoIterator<Item = TypeDecl>) -> Self {
        let mut classpath = Self::default();
        for decl in decls {
            classpath.register(decl);
        }
        classpath
    }

    /// Register a type, replacing any earlier declaration of the same name.
    pub fn register(&mut self, mut decl: TypeDecl) {
        decl.name = decl.name.trim().to_string();
        if let Some(parent) = decl.extends.as_mut() {
            *parent = parent.trim().to_string();
        }
        log::debug!("classpath: registered {}", decl.name);
        self.types.insert(decl.name.clone(), decl);
    }

    pub fn load_class(&self, name: &str) -> Result<&TypeDecl, LoadError> {
        let name = name.trim();
        ClassName::parse(name).map_err(|_| LoadError::InvalidName(name.to_string()))?;
        self.types
            .get(name)
            .ok_or_else(|| LoadError::ClassNotFound(name.to_string()))
    }

    /// True if `name` is `ancestor` or inherits from it through declared `extends` links.
    pub fn is_subtype(&self, name: &str, ancestor: &str) -> bool {
        let mut current = Some(name);
        let mut steps = 0;
        while let Some(type_name) = current {
            if type_name == ancestor {
                return true;
            }
            // Cycle guard: a chain can never be longer than the registry.
            steps += 1;
            if steps > self.types.len() {
                return false;
            }
            current = self
                .types
                .get(type_name)
                .and_then(|decl| decl.extends.as_deref());
        }
        false
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}
