use std::collections::{BTreeMap, BTreeSet};

use xbind_core::GeneratorError;
use xbind_core::model::{ClassName, DefinedClass, JAVA_LANG};

/// Every class a generated file must import, sorted by fully-qualified name.
///
/// `java.lang`, the default package and the class's own package need no import.
/// A reference whose simple name is taken by another import or by the class
/// itself is an error.
pub fn collect_imports(class: &DefinedClass) -> Result<Vec<String>, GeneratorError> {
    let mut referenced: BTreeSet<&ClassName> = BTreeSet::new();
    for field in &class.fields {
        referenced.extend(field.ty.class_names());
    }
    for method in &class.methods {
        referenced.extend(method.return_type.class_names());
        referenced.extend(method.annotations.iter());
        for param in &method.params {
            referenced.extend(param.ty.class_names());
        }
        for statement in &method.body {
            referenced.extend(statement.expr().class_names());
        }
    }

    let mut by_simple: BTreeMap<&str, &ClassName> = BTreeMap::new();
    by_simple.insert(class.name.simple(), &class.name);
    let mut imports = BTreeSet::new();
    for name in referenced {
        let package = name.package();
        if package.is_empty() || package == JAVA_LANG || package == class.name.package() {
            continue;
        }
        if let Some(existing) = by_simple.insert(name.simple(), name)
            && existing != name
        {
            return Err(GeneratorError::NameClash {
                class: class.name.simple().to_string(),
                first: existing.fqcn(),
                second: name.fqcn(),
            });
        }
        imports.insert(name.fqcn());
    }
    Ok(imports.into_iter().collect())
}
