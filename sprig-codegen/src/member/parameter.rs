use sprig_core::{Modifier, ModifierSet, is_valid_name};

use crate::{AnnotationSpec, CodeWriter, EmitError, Error, Result, Rule, TypeName};

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    ty: TypeName,
    name: String,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
}

impl ParameterSpec {
    pub fn builder(ty: impl Into<TypeName>, name: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder {
            ty: ty.into(),
            name: name.into(),
            annotations: Vec::new(),
            modifiers: ModifierSet::new(),
        }
    }

    /// Shorthand for a parameter with no annotations or modifiers.
    pub fn of(ty: impl Into<TypeName>, name: impl Into<String>) -> Result<Self> {
        Self::builder(ty, name).build()
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Render as `final Type name`, or `Type... name` for the varargs slot.
    pub fn emit(&self, writer: &mut CodeWriter, varargs: bool) -> std::result::Result<(), EmitError> {
        writer.emit_annotations(&self.annotations, true)?;
        writer.emit_modifiers(&self.modifiers, &ModifierSet::new());
        match self.ty.array_component() {
            Some(component) if varargs => {
                writer.emit_type(component).write("...");
            }
            _ => {
                writer.emit_type(&self.ty);
            }
        }
        writer.write(" ").write(&self.name);
        Ok(())
    }
}

/// Builder for [`ParameterSpec`].
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    ty: TypeName,
    name: String,
    annotations: Vec<AnnotationSpec>,
    modifiers: ModifierSet,
}

impl ParameterBuilder {
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn build(self) -> Result<ParameterSpec> {
        if !is_valid_name(&self.name) {
            return Err(Error::InvalidName {
                context: "parameter",
                name: self.name,
            });
        }
        if let Some(modifier) = self.modifiers.iter().find(|m| **m != Modifier::Final) {
            return Err(Error::violation(
                Rule::ParameterModifiers,
                format!("parameter {} cannot be {modifier}", self.name),
            ));
        }
        if self.ty == TypeName::Void {
            return Err(Error::InvalidType {
                input: "void".into(),
                message: format!("parameter {} cannot have type void", self.name),
            });
        }
        Ok(ParameterSpec {
            ty: self.ty,
            name: self.name,
            annotations: self.annotations,
            modifiers: self.modifiers,
        })
    }
}
