use xbind_core::model::{ClassName, DefinedClass, Expr, JType, MethodDef, Primitive, Visibility};

use crate::style::StyleSelection;

/// Package of the commons-lang3 reflection builders.
pub const BUILDER_PACKAGE: &str = "org.apache.commons.lang3.builder";

pub fn to_string_builder() -> ClassName {
    ClassName::new(BUILDER_PACKAGE, "ToStringBuilder")
}

pub fn to_string_style() -> ClassName {
    ClassName::new(BUILDER_PACKAGE, "ToStringStyle")
}

pub fn equals_builder() -> ClassName {
    ClassName::new(BUILDER_PACKAGE, "EqualsBuilder")
}

pub fn hash_code_builder() -> ClassName {
    ClassName::new(BUILDER_PACKAGE, "HashCodeBuilder")
}

/// `ToStringStyle.NAME` for built-ins, `new Custom()` for user styles.
pub fn style_expr(style: &StyleSelection) -> Expr {
    match style {
        StyleSelection::Named(builtin) => Expr::static_ref(to_string_style(), builtin.name()),
        StyleSelection::Custom(class) => Expr::new_instance(class.clone()),
    }
}

fn overriding(return_type: JType, name: &str) -> MethodDef {
    let mut method = MethodDef::new(Visibility::Public, return_type, name);
    method.annotate(ClassName::override_annotation());
    method
}

/// `public String toString()` delegating to `ToStringBuilder.reflectionToString`.
pub fn to_string_method(style: &StyleSelection) -> MethodDef {
    let mut method = overriding(JType::class(ClassName::string()), "toString");
    method.returns(
        Expr::static_invoke(to_string_builder(), "reflectionToString")
            .arg(Expr::This)
            .arg(style_expr(style)),
    );
    method
}

/// `public boolean equals(Object that)` delegating to `EqualsBuilder.reflectionEquals`.
pub fn equals_method() -> MethodDef {
    let mut method = overriding(JType::Primitive(Primitive::Boolean), "equals");
    let that = method.param(JType::class(ClassName::object()), "that");
    method.returns(
        Expr::static_invoke(equals_builder(), "reflectionEquals")
            .arg(Expr::This)
            .arg(that),
    );
    method
}

/// `public int hashCode()` delegating to `HashCodeBuilder.reflectionHashCode`.
pub fn hash_code_method() -> MethodDef {
    let mut method = overriding(JType::Primitive(Primitive::Int), "hashCode");
    method.returns(Expr::static_invoke(hash_code_builder(), "reflectionHashCode").arg(Expr::This));
    method
}

/// Append `toString`, `equals` and `hashCode` to one class.
///
/// Not idempotent: a second call adds a second set of methods.
pub fn attach_derived_methods(class: &mut DefinedClass, style: &StyleSelection) {
    class.add_method(to_string_method(style));
    class.add_method(equals_method());
    class.add_method(hash_code_method());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BuiltinStyle;
    use xbind_core::model::Statement;

    fn body_expr(method: &MethodDef) -> &Expr {
        assert_eq!(method.body.len(), 1);
        match &method.body[0] {
            Statement::Return(expr) => expr,
        }
    }

    #[test]
    fn test_to_string_named_style() {
        let method = to_string_method(&StyleSelection::Named(BuiltinStyle::Simple));
        assert_eq!(method.return_type, JType::class(ClassName::string()));
        assert!(method.params.is_empty());
        assert_eq!(
            body_expr(&method),
            &Expr::static_invoke(to_string_builder(), "reflectionToString")
                .arg(Expr::This)
                .arg(Expr::static_ref(to_string_style(), "SIMPLE_STYLE"))
        );
    }

    #[test]
    fn test_to_string_custom_style_constructs_instance() {
        let custom = ClassName::new("com.example", "MyStyle");
        let method = to_string_method(&StyleSelection::Custom(custom.clone()));
        match body_expr(&method) {
            Expr::StaticInvoke { args, .. } => {
                assert_eq!(args[1], Expr::new_instance(custom));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_equals_passes_parameter() {
        let method = equals_method();
        assert_eq!(method.return_type, JType::Primitive(Primitive::Boolean));
        assert_eq!(method.params.len(), 1);
        assert_eq!(method.params[0].ty, JType::class(ClassName::object()));
        assert_eq!(
            body_expr(&method),
            &Expr::static_invoke(equals_builder(), "reflectionEquals")
                .arg(Expr::This)
                .arg(Expr::var("that"))
        );
    }

    #[test]
    fn test_hash_code_has_no_style() {
        let method = hash_code_method();
        assert_eq!(method.return_type, JType::Primitive(Primitive::Int));
        assert_eq!(body_expr(&method).class_names(), vec![&hash_code_builder()]);
    }

    #[test]
    fn test_attach_adds_three_overrides() {
        let mut class = DefinedClass::new(ClassName::new("com.example", "Point"));
        attach_derived_methods(&mut class, &StyleSelection::default());

        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["toString", "equals", "hashCode"]);
        for method in &class.methods {
            assert_eq!(method.visibility, Visibility::Public);
            assert!(method.is_annotated(&ClassName::override_annotation()));
        }
    }
}
