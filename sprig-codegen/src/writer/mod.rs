//! Text writer for rendered declarations.

mod literal;

pub use literal::string_literal;
use sprig_core::{ModifierSet, RenderConfig};

use crate::{
    Arg, AnnotationSpec, ClassName, CodeBlock, Declaration, EmitError, TypeName, TypeVariable,
    code::{Placeholder, Segment},
};

/// One declaration currently open on the writer.
#[derive(Debug, Clone)]
struct DeclarationFrame {
    name: Option<String>,
    nested: Vec<String>,
}

impl DeclarationFrame {
    fn declares(&self, simple_name: &str) -> bool {
        self.name.as_deref() == Some(simple_name) || self.nested.iter().any(|n| n == simple_name)
    }
}

/// Writer that tracks indentation, statement continuation and the stack of
/// enclosing declarations while source text is emitted.
///
/// Indentation is written lazily at the start of each non-empty line, so
/// blank lines never carry trailing whitespace.
///
/// # Example
///
/// ```
/// use sprig_codegen::CodeWriter;
/// use sprig_core::RenderConfig;
///
/// let mut writer = CodeWriter::new(RenderConfig::default());
/// writer.write("void run() {\n").indent().write("go();\n");
/// writer.unindent().unwrap().write("}\n");
/// assert_eq!(writer.build(), "void run() {\n  go();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    config: RenderConfig,
    buffer: String,
    indent_level: usize,
    trailing_newline: bool,
    in_doc: bool,
    statement_line: Option<usize>,
    declarations: Vec<DeclarationFrame>,
}

impl CodeWriter {
    /// Create a writer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            indent_level: 0,
            trailing_newline: true,
            in_doc: false,
            statement_line: None,
            declarations: Vec::new(),
        }
    }

    // =========================================================================
    // Text and indentation
    // =========================================================================

    /// Append text, indenting each line that is started.
    pub fn write(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                if self.in_doc && self.trailing_newline {
                    self.write_indent();
                    self.buffer.push_str(" *");
                }
                self.buffer.push('\n');
                self.trailing_newline = true;
                if let Some(line_number) = self.statement_line {
                    if line_number == 0 {
                        self.indent_level += 2;
                    }
                    self.statement_line = Some(line_number + 1);
                }
            }

            if line.is_empty() {
                continue;
            }

            if self.trailing_newline {
                self.write_indent();
                if self.in_doc {
                    self.buffer.push_str(" * ");
                }
            }
            self.buffer.push_str(line);
            self.trailing_newline = false;
        }
        self
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation by one level.
    pub fn unindent(&mut self) -> Result<&mut Self, EmitError> {
        self.unindent_by(1)
    }

    fn unindent_by(&mut self, levels: usize) -> Result<&mut Self, EmitError> {
        if levels > self.indent_level {
            return Err(EmitError::Unindent {
                levels,
                current: self.indent_level,
            });
        }
        self.indent_level -= levels;
        Ok(self)
    }

    /// The line number within the open statement, if a statement is open.
    pub fn statement_line(&self) -> Option<usize> {
        self.statement_line
    }

    /// Replace the statement marker, returning the previous one.
    pub fn set_statement_line(&mut self, line: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.statement_line, line)
    }

    // =========================================================================
    // Structured emission
    // =========================================================================

    /// Emit a doc comment. Empty docs emit nothing.
    pub fn emit_doc(&mut self, doc: &CodeBlock) -> Result<(), EmitError> {
        if doc.is_empty() {
            return Ok(());
        }
        self.write("/**\n");
        self.in_doc = true;
        let result = self.emit_block(doc);
        self.in_doc = false;
        result?;
        self.write(" */\n");
        Ok(())
    }

    /// Emit annotations, space separated when `inline`, else one per line.
    pub fn emit_annotations(
        &mut self,
        annotations: &[AnnotationSpec],
        inline: bool,
    ) -> Result<(), EmitError> {
        for annotation in annotations {
            annotation.emit(self)?;
            self.write(if inline { " " } else { "\n" });
        }
        Ok(())
    }

    /// Emit each modifier not in `implicit`, followed by a space.
    pub fn emit_modifiers(&mut self, modifiers: &ModifierSet, implicit: &ModifierSet) -> &mut Self {
        for modifier in modifiers.difference(implicit) {
            self.write(modifier.keyword());
            self.write(" ");
        }
        self
    }

    /// Emit `<T, U extends A & B>`. Nothing is emitted for an empty list.
    pub fn emit_type_parameters(&mut self, parameters: &[TypeVariable]) -> &mut Self {
        if parameters.is_empty() {
            return self;
        }
        self.write("<");
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(parameter.name());
            for (j, bound) in parameter.bounds().iter().enumerate() {
                self.write(if j == 0 { " extends " } else { " & " });
                self.emit_type(bound);
            }
        }
        self.write(">");
        self
    }

    /// Emit a type name, shortened where the reference is unambiguous.
    pub fn emit_type(&mut self, ty: &TypeName) -> &mut Self {
        match ty {
            TypeName::Void => self.write("void"),
            TypeName::Primitive(primitive) => self.write(primitive.keyword()),
            TypeName::Class(class) => {
                let name = self.lookup_name(class);
                self.write(&name)
            }
            TypeName::Parameterized { raw, args } => {
                let name = self.lookup_name(raw);
                self.write(&name).write("<");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_type(arg);
                }
                self.write(">")
            }
            TypeName::Variable(name) => self.write(name),
            TypeName::Array(component) => self.emit_type(component).write("[]"),
        }
    }

    /// Emit a parsed template.
    pub fn emit_code(&mut self, block: &CodeBlock) -> Result<(), EmitError> {
        for segment in block.segments() {
            match segment {
                Segment::Text(text) => {
                    self.write(text);
                }
                Segment::Arg(placeholder, arg) => self.emit_arg(*placeholder, arg)?,
                Segment::Indent => {
                    self.indent();
                }
                Segment::Unindent => {
                    self.unindent()?;
                }
                Segment::StatementStart => {
                    if self.statement_line.is_some() {
                        return Err(EmitError::Statement(
                            "statement enter $[ followed by statement enter $[",
                        ));
                    }
                    self.statement_line = Some(0);
                }
                Segment::StatementEnd => {
                    let line = self.statement_line.ok_or(EmitError::Statement(
                        "statement exit $] has no matching statement enter $[",
                    ))?;
                    if line > 0 {
                        self.unindent_by(2)?;
                    }
                    self.statement_line = None;
                }
            }
        }
        Ok(())
    }

    /// Emit a template, ending on a fresh line.
    pub fn emit_block(&mut self, block: &CodeBlock) -> Result<(), EmitError> {
        self.emit_code(block)?;
        if !self.trailing_newline {
            self.write("\n");
        }
        Ok(())
    }

    /// Parse and emit a template in one step.
    pub fn emit(
        &mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<(), EmitError> {
        let block = CodeBlock::of(format, args)?;
        self.emit_code(&block)
    }

    fn emit_arg(&mut self, placeholder: Placeholder, arg: &Arg) -> Result<(), EmitError> {
        match (placeholder, arg) {
            (Placeholder::Str, Arg::Str(None)) => {
                self.write("null");
            }
            (Placeholder::Str, Arg::Str(Some(value)) | Arg::Literal(value)) => {
                self.write(&string_literal(value));
            }
            (Placeholder::Name, Arg::Declaration(declaration)) => {
                self.write(declaration.name().unwrap_or_default());
            }
            (_, Arg::Literal(text) | Arg::Name(text)) => {
                self.write(text);
            }
            (_, Arg::Str(value)) => {
                self.write(&value.as_deref().map_or_else(|| "null".to_string(), string_literal));
            }
            (_, Arg::Type(ty)) => {
                self.emit_type(ty);
            }
            (_, Arg::Code(block)) => self.emit_code(block)?,
            (_, Arg::Declaration(declaration)) => {
                declaration.emit(self, None, &ModifierSet::new())?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Enclosing declarations
    // =========================================================================

    /// Open a declaration; its name and nested names become resolvable.
    pub fn push_declaration(&mut self, declaration: &Declaration) -> &mut Self {
        self.declarations.push(DeclarationFrame {
            name: declaration.name().map(str::to_string),
            nested: declaration
                .nested_declarations()
                .iter()
                .filter_map(|nested| nested.name().map(str::to_string))
                .collect(),
        });
        self
    }

    /// Close the innermost declaration.
    pub fn pop_declaration(&mut self) -> &mut Self {
        self.declarations.pop();
        self
    }

    /// Number of declarations currently open.
    pub fn declaration_depth(&self) -> usize {
        self.declarations.len()
    }

    fn lookup_name(&self, class: &ClassName) -> String {
        let package = class.package();
        let local = package.is_empty() || self.config.package.as_deref() == Some(package);

        let top = class.top_level_name();
        let in_scope = self.declarations.iter().any(|frame| frame.declares(top));

        // An open declaration claims this simple name; the short form is only
        // safe when the class is that declaration or nested in it.
        if in_scope {
            return if local && self.encloses(class) {
                class.relative_name()
            } else {
                class.canonical_name()
            };
        }

        if local || package == "java.lang" {
            class.relative_name()
        } else {
            class.canonical_name()
        }
    }

    /// Whether `class` is an open declaration or nested in one.
    fn encloses(&self, class: &ClassName) -> bool {
        let names = class.simple_names();
        let mut path = Vec::new();
        for frame in &self.declarations {
            let Some(name) = frame.name.as_deref() else {
                break;
            };
            path.push(name);
            if names.len() >= path.len() && names.iter().zip(&path).all(|(a, b)| a == b) {
                return true;
            }
        }
        false
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Consume the writer and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.config.indent.as_str());
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use sprig_core::{Indent, Modifier};

    use super::*;

    #[test]
    fn test_indentation_is_lazy() {
        let mut writer = CodeWriter::default();
        writer.write("class A {\n").indent().write("\nint x;\n");
        writer.unindent().unwrap().write("}\n");
        assert_eq!(writer.build(), "class A {\n\n  int x;\n}\n");
    }

    #[test]
    fn test_unindent_below_zero_fails() {
        let mut writer = CodeWriter::default();
        assert_eq!(
            writer.unindent().unwrap_err(),
            EmitError::Unindent {
                levels: 1,
                current: 0
            }
        );
    }

    #[test]
    fn test_configured_indent() {
        let mut writer = CodeWriter::new(RenderConfig::default().indent(Indent::Tab));
        writer.indent().write("x;\n");
        assert_eq!(writer.build(), "\tx;\n");
    }

    #[test]
    fn test_doc_comment() {
        let mut writer = CodeWriter::default();
        let doc = CodeBlock::of("First line.\n\nSecond line.", []).unwrap();
        writer.emit_doc(&doc).unwrap();
        assert_eq!(
            writer.build(),
            "/**\n * First line.\n *\n * Second line.\n */\n"
        );
    }

    #[test]
    fn test_empty_doc_emits_nothing() {
        let mut writer = CodeWriter::default();
        writer.emit_doc(&CodeBlock::default()).unwrap();
        assert_eq!(writer.build(), "");
    }

    #[test]
    fn test_modifiers_skip_implicit() {
        let mut writer = CodeWriter::default();
        let modifiers: ModifierSet = [Modifier::Static, Modifier::Public, Modifier::Final]
            .into_iter()
            .collect();
        let implicit: ModifierSet = [Modifier::Static].into_iter().collect();
        writer.emit_modifiers(&modifiers, &implicit);
        assert_eq!(writer.build(), "public final ");
    }

    #[test]
    fn test_type_parameters() {
        let mut writer = CodeWriter::default();
        writer.emit_type_parameters(&[
            TypeVariable::new("K"),
            TypeVariable::new("V")
                .bound(TypeName::class("java.lang", "Number"))
                .bound(TypeName::class("java.lang", "Comparable")),
        ]);
        assert_eq!(
            writer.build(),
            "<K, V extends Number & Comparable>"
        );
    }

    #[test]
    fn test_type_names_use_configured_package() {
        let mut writer = CodeWriter::new(RenderConfig::default().package("com.example"));
        writer
            .emit_type(&TypeName::class("com.example", "Widget"))
            .write(" ")
            .emit_type(&TypeName::class("com.other", "Widget"))
            .write(" ")
            .emit_type(&TypeName::array(TypeName::class("java.lang", "String")));
        assert_eq!(writer.build(), "Widget com.other.Widget String[]");
    }

    #[test]
    fn test_unbalanced_statement_markers() {
        let mut writer = CodeWriter::default();
        assert!(matches!(
            writer.emit("$]", []),
            Err(EmitError::Statement(_))
        ));

        let mut writer = CodeWriter::default();
        assert!(matches!(
            writer.emit("$[a$[", []),
            Err(EmitError::Statement(_))
        ));
    }

    #[test]
    fn test_emit_surfaces_template_errors() {
        let mut writer = CodeWriter::default();
        assert!(matches!(
            writer.emit("$T", []),
            Err(EmitError::Template(_))
        ));
    }
}
