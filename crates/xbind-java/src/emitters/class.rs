use std::collections::HashSet;

use minijinja::{Environment, context};
use xbind_core::GeneratorError;
use xbind_core::model::{DefinedClass, MethodDef};

use super::expr::{render_signature, render_statement};
use super::imports::collect_imports;

/// Escape `*/` sequences that would prematurely close Javadoc comment blocks.
fn escape_javadoc(value: String) -> String {
    value.replace("*/", "*\\/")
}

/// Emit the source of one class, including any methods plugins attached.
pub fn emit_class(class: &DefinedClass, javadoc: bool) -> Result<String, GeneratorError> {
    check_duplicate_methods(class)?;

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("escape_javadoc", escape_javadoc);
    env.add_template("class.java.j2", include_str!("../../templates/class.java.j2"))
        .map_err(template_error)?;
    let tmpl = env.get_template("class.java.j2").map_err(template_error)?;

    let description: Option<Vec<&str>> = class
        .description
        .as_deref()
        .filter(|_| javadoc)
        .map(|d| d.lines().collect());

    let fields: Vec<minijinja::Value> = class
        .fields
        .iter()
        .map(|f| {
            context! {
                name => f.name.clone(),
                type => f.ty.to_string(),
                description => f.description.clone().filter(|_| javadoc),
            }
        })
        .collect();

    let methods: Vec<minijinja::Value> = class.methods.iter().map(method_to_ctx).collect();

    tmpl.render(context! {
        package => class.name.package(),
        imports => collect_imports(class)?,
        description => description,
        name => class.name.simple(),
        fields => fields,
        methods => methods,
    })
    .map_err(template_error)
}

fn method_to_ctx(method: &MethodDef) -> minijinja::Value {
    let annotations: Vec<&str> = method.annotations.iter().map(|a| a.simple()).collect();
    let body: Vec<String> = method.body.iter().map(render_statement).collect();
    context! {
        annotations => annotations,
        signature => render_signature(method),
        body => body,
    }
}

/// Two methods with the same name and parameter types cannot coexist.
fn check_duplicate_methods(class: &DefinedClass) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for method in &class.methods {
        let signature = method.signature();
        if !seen.insert(signature.clone()) {
            return Err(GeneratorError::DuplicateMethod {
                class: class.name.fqcn(),
                signature: signature.to_string(),
            });
        }
    }
    Ok(())
}

fn template_error(err: minijinja::Error) -> GeneratorError {
    GeneratorError::Template(err.to_string())
}
