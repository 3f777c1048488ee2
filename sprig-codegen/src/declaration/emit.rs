use sprig_core::ModifierSet;

use super::{Declaration, DeclarationKind};
use crate::{CodeWriter, EmitError, TypeName};

type EmitResult = std::result::Result<(), EmitError>;

impl Declaration {
    /// Write this declaration and everything nested in it.
    ///
    /// `enum_constant_name` is set when this declaration is the body of an
    /// enum constant. `implied` holds modifiers the enclosing declaration
    /// already implies, which are left out of the header.
    ///
    /// The writer's statement marker is cleared for the duration of the call
    /// and restored afterwards, so a declaration used mid-statement keeps its
    /// own indentation.
    pub fn emit(
        &self,
        writer: &mut CodeWriter,
        enum_constant_name: Option<&str>,
        implied: &ModifierSet,
    ) -> EmitResult {
        let previous_statement = writer.set_statement_line(None);
        let depth = writer.declaration_depth();

        let result = self.emit_declaration(writer, enum_constant_name, implied);

        while writer.declaration_depth() > depth {
            writer.pop_declaration();
        }
        writer.set_statement_line(previous_statement);
        result
    }

    fn emit_declaration(
        &self,
        writer: &mut CodeWriter,
        enum_constant_name: Option<&str>,
        implied: &ModifierSet,
    ) -> EmitResult {
        writer.push_declaration(self);

        if let Some(constant) = enum_constant_name {
            writer.emit_doc(&self.doc)?;
            writer.emit_annotations(&self.annotations, false)?;
            writer.write(constant);
            if let Some(arguments) = self.anonymous_arguments.as_ref().filter(|a| !a.is_empty()) {
                writer.write("(");
                writer.emit_code(arguments)?;
                writer.write(")");
            }
            if !self.has_body_members() {
                return Ok(());
            }
            writer.write(" {\n");
        } else if let Some(arguments) = &self.anonymous_arguments {
            let supertype = self.superinterfaces.first().unwrap_or(&self.superclass);
            writer.write("new ").emit_type(supertype).write("(");
            writer.emit_code(arguments)?;
            writer.write(") {\n");
        } else {
            self.emit_header(writer, implied)?;
        }

        writer.indent();
        self.emit_body(writer)?;
        writer.unindent()?;

        writer.write("}");
        if enum_constant_name.is_none() && self.anonymous_arguments.is_none() {
            writer.write("\n");
        }
        Ok(())
    }

    fn emit_header(&self, writer: &mut CodeWriter, implied: &ModifierSet) -> EmitResult {
        writer.emit_doc(&self.doc)?;
        writer.emit_annotations(&self.annotations, false)?;

        let implicit: ModifierSet = implied
            .union(&self.kind.as_member_modifiers())
            .copied()
            .collect();
        writer
            .emit_modifiers(&self.modifiers, &implicit)
            .write(self.kind.keyword())
            .write(" ")
            .write(self.name.as_deref().unwrap_or_default())
            .emit_type_parameters(&self.type_parameters);

        let (extends, implements): (Vec<&TypeName>, Vec<&TypeName>) = match self.kind {
            DeclarationKind::Interface => (self.superinterfaces.iter().collect(), Vec::new()),
            _ => (
                Some(&self.superclass).filter(|s| !s.is_object()).into_iter().collect(),
                self.superinterfaces.iter().collect(),
            ),
        };
        emit_type_list(writer, " extends ", &extends);
        emit_type_list(writer, " implements ", &implements);

        writer.write(" {\n");
        Ok(())
    }

    fn emit_body(&self, writer: &mut CodeWriter) -> EmitResult {
        let mut separator = MemberSeparator::default();

        let last = self.enum_constants.len().saturating_sub(1);
        for (i, (name, body)) in self.enum_constants.iter().enumerate() {
            separator.next(writer);
            body.emit(writer, Some(name), &ModifierSet::new())?;
            if i < last {
                writer.write(",\n");
            } else if self.has_body_members() {
                writer.write(";\n");
            } else {
                writer.write("\n");
            }
        }

        for property in self.properties.iter().filter(|p| p.is_static()) {
            separator.next(writer);
            property.emit(writer)?;
        }

        if !self.static_block.is_empty() {
            separator.next(writer);
            writer.emit_code(&self.static_block)?;
        }

        for property in self.properties.iter().filter(|p| !p.is_static()) {
            separator.next(writer);
            property.emit(writer)?;
        }

        if !self.initializer_block.is_empty() {
            separator.next(writer);
            writer.emit_code(&self.initializer_block)?;
        }

        for constructor in self.functions.iter().filter(|f| f.is_constructor()) {
            separator.next(writer);
            constructor.emit(writer, self.name.as_deref())?;
        }

        for function in self.functions.iter().filter(|f| !f.is_constructor()) {
            separator.next(writer);
            function.emit(writer, self.name.as_deref())?;
        }

        let implied = self.kind.implicit_nested_modifiers();
        for nested in &self.nested {
            separator.next(writer);
            nested.emit(writer, None, &implied)?;
        }

        Ok(())
    }

    /// Whether anything besides enum constants goes in the body.
    fn has_body_members(&self) -> bool {
        !self.properties.is_empty()
            || !self.functions.is_empty()
            || !self.nested.is_empty()
            || !self.static_block.is_empty()
            || !self.initializer_block.is_empty()
    }
}

/// Writes a blank line before every body member except the first.
#[derive(Default)]
struct MemberSeparator {
    started: bool,
}

impl MemberSeparator {
    fn next(&mut self, writer: &mut CodeWriter) {
        if self.started {
            writer.write("\n");
        }
        self.started = true;
    }
}

fn emit_type_list(writer: &mut CodeWriter, keyword: &str, types: &[&TypeName]) {
    if types.is_empty() {
        return;
    }
    writer.write(keyword);
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            writer.write(", ");
        }
        writer.emit_type(ty);
    }
}
