//! Type declarations.
//!
//! A [`Declaration`] is an immutable tree describing one class, interface,
//! enum or annotation type together with its members and nested types. It
//! is assembled with a [`DeclarationBuilder`], which enforces the structural
//! rules of the target language, and rendered to source text with
//! [`Declaration::render`].
//!
//! ```
//! use sprig_codegen::{Declaration, FunctionSpec, Modifier};
//!
//! let hello = Declaration::class_builder("Hello")
//!     .unwrap()
//!     .add_modifiers([Modifier::Public])
//!     .unwrap()
//!     .add_function(
//!         FunctionSpec::builder("greet")
//!             .modifier(Modifier::Public)
//!             .add_statement("System.out.println($S)", ["hi".into()])
//!             .unwrap()
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     hello.render().unwrap(),
//!     "public class Hello {\n  public void greet() {\n    System.out.println(\"hi\");\n  }\n}\n"
//! );
//! ```

mod builder;
mod emit;
mod kind;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

pub use builder::DeclarationBuilder;
use indexmap::IndexMap;
pub use kind::DeclarationKind;
use sprig_core::{ModifierSet, RenderConfig, is_valid_name};

use crate::{
    AnnotationSpec, Arg, CodeBlock, CodeWriter, EmitError, Error, FunctionSpec, PropertySpec,
    Result, TypeName, TypeVariable,
};

/// An immutable type declaration.
///
/// Two declarations are equal when they render to the same text.
#[derive(Debug, Clone)]
pub struct Declaration {
    kind: DeclarationKind,
    name: Option<String>,
    anonymous_arguments: Option<CodeBlock>,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
    type_parameters: Vec<TypeVariable>,
    superclass: TypeName,
    superinterfaces: Vec<TypeName>,
    enum_constants: IndexMap<String, Declaration>,
    properties: Vec<PropertySpec>,
    functions: Vec<FunctionSpec>,
    nested: Vec<Declaration>,
    static_block: CodeBlock,
    initializer_block: CodeBlock,
}

impl Declaration {
    fn empty(kind: DeclarationKind, name: Option<String>, arguments: Option<CodeBlock>) -> Self {
        Self {
            kind,
            name,
            anonymous_arguments: arguments,
            doc: CodeBlock::default(),
            annotations: Vec::new(),
            modifiers: ModifierSet::new(),
            type_parameters: Vec::new(),
            superclass: TypeName::object(),
            superinterfaces: Vec::new(),
            enum_constants: IndexMap::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            nested: Vec::new(),
            static_block: CodeBlock::default(),
            initializer_block: CodeBlock::default(),
        }
    }

    fn named_builder(kind: DeclarationKind, name: String) -> Result<DeclarationBuilder> {
        if !is_valid_name(&name) {
            return Err(Error::InvalidName {
                context: "declaration",
                name,
            });
        }
        Ok(DeclarationBuilder::new(Self::empty(kind, Some(name), None)))
    }

    /// Start a class declaration.
    pub fn class_builder(name: impl Into<String>) -> Result<DeclarationBuilder> {
        Self::named_builder(DeclarationKind::Class, name.into())
    }

    /// Start an interface declaration.
    pub fn interface_builder(name: impl Into<String>) -> Result<DeclarationBuilder> {
        Self::named_builder(DeclarationKind::Interface, name.into())
    }

    /// Start an enum declaration.
    pub fn enum_builder(name: impl Into<String>) -> Result<DeclarationBuilder> {
        Self::named_builder(DeclarationKind::Enum, name.into())
    }

    /// Start an annotation type declaration.
    pub fn annotation_builder(name: impl Into<String>) -> Result<DeclarationBuilder> {
        Self::named_builder(DeclarationKind::Annotation, name.into())
    }

    /// Start an anonymous class whose constructor call receives `arguments`.
    ///
    /// Also used for enum constant bodies, where empty arguments mean the
    /// constant is written without parentheses.
    pub fn anonymous_builder(arguments: CodeBlock) -> DeclarationBuilder {
        DeclarationBuilder::new(Self::empty(DeclarationKind::Class, None, Some(arguments)))
    }

    /// Start an anonymous class, parsing the constructor arguments from a template.
    pub fn anonymous_builder_of(
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<DeclarationBuilder> {
        Ok(Self::anonymous_builder(CodeBlock::of(format, args)?))
    }

    /// Continue building from a copy of this declaration.
    pub fn to_builder(&self) -> DeclarationBuilder {
        DeclarationBuilder::new(self.clone())
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// The declared name, or `None` for an anonymous declaration.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn anonymous_arguments(&self) -> Option<&CodeBlock> {
        self.anonymous_arguments.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous_arguments.is_some()
    }

    pub fn doc(&self) -> &CodeBlock {
        &self.doc
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    /// The superclass; `java.lang.Object` when none was set.
    pub fn superclass(&self) -> &TypeName {
        &self.superclass
    }

    pub fn superinterfaces(&self) -> &[TypeName] {
        &self.superinterfaces
    }

    /// Enum constants and their bodies, in insertion order.
    pub fn enum_constants(&self) -> &IndexMap<String, Declaration> {
        &self.enum_constants
    }

    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    pub fn functions(&self) -> &[FunctionSpec] {
        &self.functions
    }

    pub fn nested_declarations(&self) -> &[Declaration] {
        &self.nested
    }

    pub fn static_block(&self) -> &CodeBlock {
        &self.static_block
    }

    pub fn initializer_block(&self) -> &CodeBlock {
        &self.initializer_block
    }

    /// Render with the default configuration.
    pub fn render(&self) -> std::result::Result<String, EmitError> {
        self.render_with(&RenderConfig::default())
    }

    /// Render with the given indentation and package.
    #[tracing::instrument(skip_all, fields(kind = %self.kind, name = self.name.as_deref().unwrap_or("<anonymous>")))]
    pub fn render_with(&self, config: &RenderConfig) -> std::result::Result<String, EmitError> {
        let mut writer = CodeWriter::new(config.clone());
        self.emit(&mut writer, None, &ModifierSet::new())?;
        Ok(writer.build())
    }

    /// Rendered text, or `None` when rendering fails. A declaration that
    /// cannot be rendered is only equal to itself.
    fn equality_key(&self) -> Option<String> {
        self.render().ok()
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self.equality_key(), other.equality_key()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Declaration {}

impl Hash for Declaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality_key().hash(state);
    }
}

/// Writes the rendered text. Emission errors are written as a comment in
/// place of the declaration; use [`Declaration::render`] to handle them.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(text) => f.write_str(&text),
            Err(e) => write!(f, "/* unrenderable declaration: {e} */"),
        }
    }
}
