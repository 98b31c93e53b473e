use std::fmt;

use super::expr::{Expr, Statement};
use super::types::{ClassName, JType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Modifier keyword, empty for package-private.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::PackagePrivate => "",
            Visibility::Private => "private",
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: JType,
    pub name: String,
}

/// A method attached to a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub visibility: Visibility,
    pub return_type: JType,
    pub name: String,
    pub params: Vec<Param>,
    pub annotations: Vec<ClassName>,
    pub body: Vec<Statement>,
}

impl MethodDef {
    pub fn new(visibility: Visibility, return_type: JType, name: impl Into<String>) -> Self {
        Self {
            visibility,
            return_type,
            name: name.into(),
            params: Vec::new(),
            annotations: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Declare a parameter and return an expression referring to it.
    pub fn param(&mut self, ty: JType, name: impl Into<String>) -> Expr {
        let name = name.into();
        self.params.push(Param {
            ty,
            name: name.clone(),
        });
        Expr::Var(name)
    }

    pub fn annotate(&mut self, annotation: ClassName) {
        self.annotations.push(annotation);
    }

    pub fn returns(&mut self, expr: Expr) {
        self.body.push(Statement::Return(expr));
    }

    pub fn is_annotated(&self, annotation: &ClassName) -> bool {
        self.annotations.contains(annotation)
    }

    /// Name plus parameter types, the identity used for overload conflicts.
    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            params: self.params.iter().map(|p| p.ty.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<JType>,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.name, params.join(", "))
    }
}

/// A field on a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: JType,
    pub description: Option<String>,
}

/// One class the pipeline will emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedClass {
    pub name: ClassName,
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
    pub methods: Vec<MethodDef>,
}

impl DefinedClass {
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            description: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a method. Conflicting signatures are caught at render time.
    pub fn add_method(&mut self, method: MethodDef) -> &mut MethodDef {
        self.methods.push(method);
        let last = self.methods.len() - 1;
        &mut self.methods[last]
    }

    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// The full set of classes produced by one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeModel {
    pub package: String,
    pub classes: Vec<DefinedClass>,
}

impl CodeModel {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            classes: Vec::new(),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &DefinedClass> {
        self.classes.iter()
    }

    pub fn classes_mut(&mut self) -> impl Iterator<Item = &mut DefinedClass> {
        self.classes.iter_mut()
    }

    pub fn class(&self, simple_name: &str) -> Option<&DefinedClass> {
        self.classes.iter().find(|c| c.name.simple() == simple_name)
    }
}
