use sprig_core::{Modifier, ModifierSet, is_valid_name};

use crate::{AnnotationSpec, Arg, CodeBlock, CodeWriter, EmitError, Error, Result, TypeName};

/// A field of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    ty: TypeName,
    name: String,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
    initializer: Option<CodeBlock>,
}

impl PropertySpec {
    /// Start building a property of the given type.
    pub fn builder(ty: impl Into<TypeName>, name: impl Into<String>) -> PropertyBuilder {
        PropertyBuilder {
            ty: ty.into(),
            name: name.into(),
            doc: CodeBlock::builder(),
            annotations: Vec::new(),
            modifiers: ModifierSet::new(),
            initializer: None,
        }
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
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

    pub fn initializer(&self) -> Option<&CodeBlock> {
        self.initializer.as_ref()
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_static(&self) -> bool {
        self.has_modifier(Modifier::Static)
    }

    /// Render as `modifiers Type name = initializer;` on its own line.
    pub fn emit(&self, writer: &mut CodeWriter) -> std::result::Result<(), EmitError> {
        writer.emit_doc(&self.doc)?;
        writer.emit_annotations(&self.annotations, false)?;
        writer
            .emit_modifiers(&self.modifiers, &ModifierSet::new())
            .emit_type(&self.ty)
            .write(" ")
            .write(&self.name);
        if let Some(initializer) = self.initializer.as_ref().filter(|i| !i.is_empty()) {
            writer.write(" = ");
            writer.emit_code(initializer)?;
        }
        writer.write(";\n");
        Ok(())
    }
}

/// Builder for [`PropertySpec`].
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    ty: TypeName,
    name: String,
    doc: crate::CodeBlockBuilder,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
    initializer: Option<CodeBlock>,
}

impl PropertyBuilder {
    /// Append to the doc comment.
    pub fn doc(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        self.doc = self.doc.add(format, args)?;
        Ok(self)
    }

    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Set the initializer from a template.
    pub fn initializer(self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        let block = CodeBlock::of(format, args)?;
        Ok(self.initializer_block(block))
    }

    pub fn initializer_block(mut self, block: CodeBlock) -> Self {
        self.initializer = Some(block);
        self
    }

    pub fn build(self) -> Result<PropertySpec> {
        if !is_valid_name(&self.name) {
            return Err(Error::InvalidName {
                context: "property",
                name: self.name,
            });
        }
        if self.ty == TypeName::Void {
            return Err(Error::InvalidType {
                input: "void".into(),
                message: format!("property {} cannot have type void", self.name),
            });
        }
        Ok(PropertySpec {
            ty: self.ty,
            name: self.name,
            doc: self.doc.build(),
            annotations: self.annotations,
            modifiers: self.modifiers,
            initializer: self.initializer,
        })
    }
}
