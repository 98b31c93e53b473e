use std::fmt;

use crate::error::TypeError;

/// Package that never needs an import.
pub const JAVA_LANG: &str = "java.lang";

/// A class name split into its package and simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple: simple.into(),
        }
    }

    /// Parse a dotted name such as `com.example.MyStyle` or a bare `Point`.
    pub fn parse(name: &str) -> Result<Self, TypeError> {
        let name = name.trim();
        if name.is_empty() || !name.split('.').all(is_identifier) {
            return Err(TypeError::InvalidName(name.to_string()));
        }
        match name.rsplit_once('.') {
            Some((package, simple)) => Ok(Self::new(package, simple)),
            None => Ok(Self::new("", name)),
        }
    }

    pub fn object() -> Self {
        Self::new(JAVA_LANG, "Object")
    }

    pub fn string() -> Self {
        Self::new(JAVA_LANG, "String")
    }

    pub fn override_annotation() -> Self {
        Self::new(JAVA_LANG, "Override")
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// Fully-qualified name; the simple name for the default package.
    pub fn fqcn(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqcn())
    }
}

/// Returns true if `segment` is a valid Java identifier.
pub fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let primitive = match keyword {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "char" => Primitive::Char,
            "short" => Primitive::Short,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            "void" => Primitive::Void,
            _ => return None,
        };
        Some(primitive)
    }
}

/// A type reference in the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JType {
    Primitive(Primitive),
    Class { name: ClassName, args: Vec<JType> },
    Array(Box<JType>),
}

impl JType {
    pub fn class(name: ClassName) -> Self {
        JType::Class {
            name,
            args: Vec::new(),
        }
    }

    /// Parse a Java type string: `int`, `String`, `java.util.List<Foo>`, `byte[]`.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let mut parser = TypeParser { src: input, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != input.len() {
            return Err(TypeError::InvalidType(input.to_string()));
        }
        Ok(ty)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, JType::Primitive(Primitive::Void))
    }

    /// Every class name mentioned by this type, generic arguments included.
    pub fn class_names(&self) -> Vec<&ClassName> {
        let mut names = Vec::new();
        self.collect_class_names(&mut names);
        names
    }

    fn collect_class_names<'a>(&'a self, names: &mut Vec<&'a ClassName>) {
        match self {
            JType::Primitive(_) => {}
            JType::Class { name, args } => {
                names.push(name);
                for arg in args {
                    arg.collect_class_names(names);
                }
            }
            JType::Array(inner) => inner.collect_class_names(names),
        }
    }
}

/// Renders with simple names; imports carry the packages.
impl fmt::Display for JType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JType::Primitive(p) => f.write_str(p.keyword()),
            JType::Class { name, args } => {
                f.write_str(name.simple())?;
                if !args.is_empty() {
                    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
                    write!(f, "<{}>", rendered.join(", "))?;
                }
                Ok(())
            }
            JType::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
}

impl TypeParser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self) -> TypeError {
        TypeError::InvalidType(self.src.to_string())
    }

    fn parse_type(&mut self) -> Result<JType, TypeError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.') {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = &self.src[start..self.pos];
        if name.is_empty() {
            return Err(self.error());
        }

        let mut ty = match Primitive::from_keyword(name) {
            Some(primitive) => JType::Primitive(primitive),
            None => {
                let class = ClassName::parse(name)?;
                let mut args = Vec::new();
                if self.eat('<') {
                    loop {
                        let arg = self.parse_type()?;
                        if matches!(arg, JType::Primitive(_)) {
                            return Err(self.error());
                        }
                        args.push(arg);
                        if self.eat(',') {
                            continue;
                        }
                        if self.eat('>') {
                            break;
                        }
                        return Err(self.error());
                    }
                }
                JType::Class { name: class, args }
            }
        };

        while self.eat('[') {
            if !self.eat(']') || ty.is_void() {
                return Err(self.error());
            }
            ty = JType::Array(Box::new(ty));
        }
        Ok(ty)
    }
}
