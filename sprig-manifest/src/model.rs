//! Table definitions of `sprig.toml`.
//!
//! Code snippets (initializers, statements, arguments, annotation values)
//! are written verbatim into the rendered source. Type names are parsed
//! with [`TypeName::parse`](sprig_codegen::TypeName::parse).

use indexmap::IndexMap;
use serde::Deserialize;
use sprig_codegen::{DeclarationKind, Modifier};

/// One `[[declarations]]` entry, or a `nested` entry inside one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationDef {
    pub kind: DeclarationKind,
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub doc: Option<String>,
    pub superclass: Option<String>,
    #[serde(default)]
    pub superinterfaces: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDef>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
    #[serde(default)]
    pub enum_constants: Vec<EnumConstantDef>,
    #[serde(default)]
    pub nested: Vec<DeclarationDef>,
    /// Statements of the `static { }` block.
    #[serde(default)]
    pub static_block: Vec<String>,
    /// Statements of the instance `{ }` block.
    #[serde(default)]
    pub initializer_block: Vec<String>,
}

/// A generic type parameter: `{ name = "T", bounds = ["java.lang.Number"] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeParameterDef {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

/// An annotation: `{ type = "java.lang.SuppressWarnings", members = { value = ["\"unchecked\""] } }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationDef {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub members: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
    pub initializer: Option<String>,
}

/// A method, or a constructor when `name` is omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDef {
    pub name: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDef>,
    /// Return type; `void` when omitted.
    pub returns: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub throws: Vec<String>,
    /// Statements of the body; each gets a trailing `;`.
    #[serde(default)]
    pub body: Vec<String>,
    /// Default value of an annotation member.
    pub default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDef>,
}

/// An enum constant with optional constructor arguments and body members.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumConstantDef {
    pub name: String,
    pub arguments: Option<String>,
    pub doc: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}
