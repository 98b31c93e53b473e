use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::{TransformError, TypeError};
use crate::model::types::is_identifier;
use crate::model::{ClassName, CodeModel, DefinedClass, FieldDef, JType};
use crate::parse::{ClassSpec, ModelFile};

use super::name_normalizer::{class_name, field_name};

/// Build the class model the plugins operate on from a parsed model file.
pub fn transform(file: &ModelFile) -> Result<CodeModel, TransformError> {
    let package = file.package.trim().to_string();
    if !package.is_empty() && !package.split('.').all(is_identifier) {
        return Err(TransformError::InvalidPackage(package));
    }

    // Field types may refer to model classes by their original names.
    let local: HashMap<&str, String> = file
        .classes
        .iter()
        .map(|c| (c.name.as_str(), class_name(&c.name)))
        .collect();

    let mut model = CodeModel::new(package.clone());
    let mut seen = HashSet::new();
    for spec in &file.classes {
        let class = transform_class(&package, spec, &local)?;
        if !seen.insert(class.name.simple().to_string()) {
            return Err(TransformError::DuplicateClass(class.name.simple().to_string()));
        }
        debug!(
            "class {} with {} fields",
            class.name.fqcn(),
            class.fields.len()
        );
        model.classes.push(class);
    }
    Ok(model)
}

fn transform_class(
    package: &str,
    spec: &ClassSpec,
    local: &HashMap<&str, String>,
) -> Result<DefinedClass, TransformError> {
    let simple = class_name(&spec.name);
    let mut class = DefinedClass::new(ClassName::new(package, simple.as_str()));
    class.description = spec.description.clone();

    let mut seen = HashSet::new();
    for field in &spec.fields {
        let name = field_name(&field.name);
        if !seen.insert(name.clone()) {
            return Err(TransformError::DuplicateField {
                class: simple,
                field: name,
            });
        }
        let ty = JType::parse(&field.field_type).map_err(|source| {
            TransformError::InvalidFieldType {
                class: simple.clone(),
                field: name.clone(),
                source,
            }
        })?;
        if ty.is_void() {
            return Err(TransformError::InvalidFieldType {
                class: simple,
                field: name,
                source: TypeError::InvalidType(field.field_type.clone()),
            });
        }
        class.fields.push(FieldDef {
            name,
            ty: rename_local(ty, local),
            description: field.description.clone(),
        });
    }
    Ok(class)
}

/// Point unqualified references to model classes at their normalized names.
fn rename_local(ty: JType, local: &HashMap<&str, String>) -> JType {
    match ty {
        JType::Class { name, args } => {
            let args = args.into_iter().map(|a| rename_local(a, local)).collect();
            let name = match local.get(name.simple()) {
                Some(renamed) if name.package().is_empty() => ClassName::new("", renamed.as_str()),
                _ => name,
            };
            JType::Class { name, args }
        }
        JType::Array(inner) => JType::Array(Box::new(rename_local(*inner, local))),
        primitive @ JType::Primitive(_) => primitive,
    }
}
