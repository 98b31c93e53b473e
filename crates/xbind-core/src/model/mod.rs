pub mod class;
pub mod expr;
pub mod types;

pub use class::{
    CodeModel, DefinedClass, FieldDef, MethodDef, MethodSignature, Param, Visibility,
};
pub use expr::{Expr, Statement};
pub use types::{ClassName, JAVA_LANG, JType, Primitive};
