use indexmap::IndexMap;
use sprig_core::is_valid_name;

use crate::{ClassName, CodeBlock, CodeWriter, EmitError, Error, Result, TypeName};

/// An annotation on a declaration, member or parameter.
///
/// Members keep insertion order; a member with several values renders as
/// an array initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSpec {
    type_name: ClassName,
    members: IndexMap<String, Vec<CodeBlock>>,
}

impl AnnotationSpec {
    /// Create a marker annotation.
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: IndexMap::new(),
        }
    }

    /// Add a value to a member, creating the member if needed.
    pub fn member(mut self, name: impl Into<String>, value: CodeBlock) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidName {
                context: "annotation member",
                name,
            });
        }
        self.members.entry(name).or_default().push(value);
        Ok(self)
    }

    pub fn type_name(&self) -> &ClassName {
        &self.type_name
    }

    pub fn members(&self) -> &IndexMap<String, Vec<CodeBlock>> {
        &self.members
    }

    /// Render as `@Type`, `@Type(value)` or `@Type(a = x, b = {y, z})`.
    pub fn emit(&self, writer: &mut CodeWriter) -> std::result::Result<(), EmitError> {
        writer.write("@");
        writer.emit_type(&TypeName::Class(self.type_name.clone()));

        if self.members.is_empty() {
            return Ok(());
        }

        writer.write("(");
        let only_value = self.members.len() == 1 && self.members.contains_key("value");
        for (i, (name, values)) in self.members.iter().enumerate() {
            if i > 0 {
                writer.write(", ");
            }
            if !only_value {
                writer.write(name).write(" = ");
            }
            emit_values(writer, values)?;
        }
        writer.write(")");
        Ok(())
    }
}

fn emit_values(writer: &mut CodeWriter, values: &[CodeBlock]) -> std::result::Result<(), EmitError> {
    if let [single] = values {
        return writer.emit_code(single);
    }
    writer.write("{");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.write(", ");
        }
        writer.emit_code(value)?;
    }
    writer.write("}");
    Ok(())
}
