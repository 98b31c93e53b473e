use heck::{ToLowerCamelCase, ToUpperCamelCase};

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Normalize an arbitrary model name to an UpperCamelCase class name.
pub fn class_name(name: &str) -> String {
    to_identifier(sanitize(name).to_upper_camel_case())
}

/// Normalize an arbitrary model name to a lowerCamelCase field name.
pub fn field_name(name: &str) -> String {
    to_identifier(sanitize(name).to_lower_camel_case())
}

pub fn is_keyword(word: &str) -> bool {
    JAVA_KEYWORDS.contains(&word)
}

/// Replace anything that is not alphanumeric with a word separator.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

fn to_identifier(cased: String) -> String {
    if cased.is_empty() {
        return "unnamed".to_string();
    }
    if cased.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{cased}");
    }
    if is_keyword(&cased) {
        return format!("{cased}_");
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(class_name("point"), "Point");
        assert_eq!(class_name("ship-to address"), "ShipToAddress");
        assert_eq!(class_name("PurchaseOrder"), "PurchaseOrder");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(field_name("first_name"), "firstName");
        assert_eq!(field_name("Zip-Code"), "zipCode");
        assert_eq!(field_name("x"), "x");
    }

    #[test]
    fn test_keywords_escaped() {
        assert_eq!(field_name("class"), "class_");
        assert_eq!(field_name("default"), "default_");
    }

    #[test]
    fn test_leading_digit_and_empty() {
        assert_eq!(field_name("3dModel"), "_3dModel");
        assert_eq!(class_name("---"), "unnamed");
    }
}
