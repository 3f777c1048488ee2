//! Type names referenced by declarations and members.
//!
//! A [`TypeName`] is the universal representation of a type used as a
//! supertype, property type, return type or template argument. Types are
//! only named here; the writer decides how much of the name to print.

use sprig_core::is_valid_identifier;

use crate::{Error, Result};

/// Primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    /// The source keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Look up a primitive by keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// A fully-qualified class or interface name.
///
/// `simple_names` holds the enclosing chain for nested types, outermost
/// first (`["Map", "Entry"]` for `java.util.Map.Entry`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// `java.lang.Object`, the implicit superclass of every class.
    pub fn object() -> Self {
        Self::new("java.lang", "Object")
    }

    /// Guess a class name from a dotted string.
    ///
    /// Segments before the first capitalized segment form the package,
    /// the rest are simple names: `java.util.Map.Entry` is `Entry` nested
    /// in `Map` in package `java.util`. Returns `None` if any segment is
    /// not an identifier.
    pub fn best_guess(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split('.').collect();
        if parts.iter().any(|part| !is_valid_identifier(part)) {
            return None;
        }

        let first_simple = parts
            .iter()
            .position(|part| part.starts_with(char::is_uppercase))
            .unwrap_or(parts.len() - 1);

        Some(Self {
            package: parts[..first_simple].join("."),
            simple_names: parts[first_simple..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Create a class name nested in this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost simple name.
    pub fn top_level_name(&self) -> &str {
        self.simple_names.first().map(String::as_str).unwrap_or_default()
    }

    /// Simple names joined with dots, without the package.
    pub fn relative_name(&self) -> String {
        self.simple_names.join(".")
    }

    /// Package and simple names joined with dots.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name()
        } else {
            format!("{}.{}", self.package, self.relative_name())
        }
    }

    pub fn is_object(&self) -> bool {
        self.package == "java.lang" && self.simple_names == ["Object"]
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// The `void` pseudo-type, only meaningful as a return type.
    Void,
    /// A primitive type.
    Primitive(PrimitiveType),
    /// A class or interface.
    Class(ClassName),
    /// A generic class applied to type arguments: `List<String>`.
    Parameterized {
        raw: ClassName,
        args: Vec<TypeName>,
    },
    /// A reference to a type variable: `T`.
    Variable(String),
    /// An array of a component type.
    Array(Box<TypeName>),
}

impl TypeName {
    /// Create a class type.
    pub fn class(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::Class(ClassName::new(package, simple_name))
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::Class(ClassName::object())
    }

    /// Create a type variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create an array type.
    pub fn array(component: impl Into<TypeName>) -> Self {
        Self::Array(Box::new(component.into()))
    }

    /// Create a parameterized type.
    pub fn parameterized(raw: ClassName, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self::Parameterized {
            raw,
            args: args.into_iter().collect(),
        }
    }

    /// Whether this is `void` or a primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Void | Self::Primitive(_))
    }

    /// Whether this is exactly `java.lang.Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Class(class) if class.is_object())
    }

    /// The component type if this is an array.
    pub fn array_component(&self) -> Option<&TypeName> {
        match self {
            Self::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Parse a type written in source syntax.
    ///
    /// ```
    /// use sprig_codegen::{ClassName, TypeName};
    ///
    /// let ty = TypeName::parse("java.util.List<java.lang.String>").unwrap();
    /// assert_eq!(
    ///     ty,
    ///     TypeName::parameterized(
    ///         ClassName::new("java.util", "List"),
    ///         [TypeName::class("java.lang", "String")],
    ///     )
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = TypeParser { input, rest: input };
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if !parser.rest.is_empty() {
            return Err(parser.error(format!("unexpected '{}'", parser.rest)));
        }
        Ok(ty)
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        Self::Class(class)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

struct TypeParser<'a> {
    input: &'a str,
    rest: &'a str,
}

impl TypeParser<'_> {
    fn parse_type(&mut self) -> Result<TypeName> {
        self.skip_whitespace();
        let end = self
            .rest
            .find(|c: char| matches!(c, '<' | '>' | ',' | '[' | ']') || c.is_whitespace())
            .unwrap_or(self.rest.len());
        let name = &self.rest[..end];
        self.rest = &self.rest[end..];

        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }

        let mut ty = if name == "void" {
            TypeName::Void
        } else if let Some(primitive) = PrimitiveType::from_keyword(name) {
            TypeName::Primitive(primitive)
        } else {
            let raw = ClassName::best_guess(name)
                .ok_or_else(|| self.error(format!("'{name}' is not a valid class name")))?;
            self.skip_whitespace();
            if self.eat('<') {
                let mut args = Vec::new();
                loop {
                    args.push(self.parse_type()?);
                    self.skip_whitespace();
                    if self.eat(',') {
                        continue;
                    }
                    if self.eat('>') {
                        break;
                    }
                    return Err(self.error("expected ',' or '>' in type arguments"));
                }
                TypeName::Parameterized { raw, args }
            } else {
                TypeName::Class(raw)
            }
        };

        loop {
            self.skip_whitespace();
            if !self.eat('[') {
                break;
            }
            self.skip_whitespace();
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            if ty == TypeName::Void {
                return Err(self.error("void cannot be an array component"));
            }
            ty = TypeName::array(ty);
        }

        Ok(ty)
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::InvalidType {
            input: self.input.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_guess_splits_package() {
        let entry = ClassName::best_guess("java.util.Map.Entry").unwrap();
        assert_eq!(entry.package(), "java.util");
        assert_eq!(entry.simple_names(), ["Map", "Entry"]);
        assert_eq!(entry.simple_name(), "Entry");
        assert_eq!(entry.top_level_name(), "Map");
        assert_eq!(entry.canonical_name(), "java.util.Map.Entry");
    }

    #[test]
    fn test_best_guess_without_package() {
        let class = ClassName::best_guess("Widget").unwrap();
        assert_eq!(class.package(), "");
        assert_eq!(class.canonical_name(), "Widget");

        assert!(ClassName::best_guess("com..Foo").is_none());
        assert!(ClassName::best_guess("com.1Foo").is_none());
    }

    #[test]
    fn test_object_sentinel() {
        assert!(ClassName::object().is_object());
        assert!(TypeName::object().is_object());
        assert!(!TypeName::class("java.lang", "String").is_object());
    }

    #[test]
    fn test_parse_primitives_and_arrays() {
        assert_eq!(
            TypeName::parse("int").unwrap(),
            TypeName::Primitive(PrimitiveType::Int)
        );
        assert_eq!(TypeName::parse("void").unwrap(), TypeName::Void);
        assert_eq!(
            TypeName::parse("byte[][]").unwrap(),
            TypeName::array(TypeName::array(PrimitiveType::Byte))
        );
    }

    #[test]
    fn test_parse_nested_parameterized() {
        let ty = TypeName::parse("java.util.Map<java.lang.String, java.util.List<T>>").unwrap();
        let expected = TypeName::parameterized(
            ClassName::new("java.util", "Map"),
            [
                TypeName::class("java.lang", "String"),
                TypeName::parameterized(
                    ClassName::new("java.util", "List"),
                    [TypeName::class("", "T")],
                ),
            ],
        );
        assert_eq!(ty, expected);
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "List<", "List<String", "int[", "void[]", "a-b", "List<String>>"] {
            let err = TypeName::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidType { .. }),
                "expected a type error for {input:?}, got {err:?}"
            );
        }
    }
}
