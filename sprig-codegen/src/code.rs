//! Code templates.
//!
//! A [`CodeBlock`] is a parsed template: literal text interleaved with
//! arguments and control tokens. Templates are written with `$` tokens:
//!
//! - `$L` emits a literal (text, nested code, a declaration or a type)
//! - `$S` emits a string literal, or `null` for an absent string
//! - `$T` emits a type name
//! - `$N` emits an identifier
//! - `$$` emits a dollar sign
//! - `$>` / `$<` increase / decrease indentation
//! - `$[` / `$]` begin / end a statement, whose continuation lines are
//!   indented twice
//!
//! ```
//! use sprig_codegen::{Arg, CodeBlock, TypeName};
//!
//! let system = TypeName::class("java.lang", "System");
//! let block = CodeBlock::builder()
//!     .add_statement("$T.out.println($S)", [Arg::ty(system), Arg::string("Hello")])
//!     .unwrap()
//!     .build();
//! assert_eq!(block.to_string(), "System.out.println(\"Hello\");\n");
//! ```

use std::fmt;

use sprig_core::{RenderConfig, is_valid_identifier};

use crate::{CodeWriter, Declaration, Error, Result, TypeName};

/// An argument substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    /// Text emitted as-is.
    Literal(String),
    /// A string emitted as a quoted literal; `None` emits `null`.
    Str(Option<String>),
    /// A type name.
    Type(TypeName),
    /// An identifier.
    Name(String),
    /// Nested code.
    Code(CodeBlock),
    /// A declaration, typically an anonymous class body.
    Declaration(Box<Declaration>),
}

impl Arg {
    pub fn literal(value: impl fmt::Display) -> Self {
        Self::Literal(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(Some(value.into()))
    }

    pub fn null_string() -> Self {
        Self::Str(None)
    }

    pub fn ty(ty: impl Into<TypeName>) -> Self {
        Self::Type(ty.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

macro_rules! literal_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_from!(i32, i64, u32, u64, usize, bool, char);

impl From<TypeName> for Arg {
    fn from(ty: TypeName) -> Self {
        Self::Type(ty)
    }
}

impl From<crate::ClassName> for Arg {
    fn from(class: crate::ClassName) -> Self {
        Self::Type(class.into())
    }
}

impl From<CodeBlock> for Arg {
    fn from(block: CodeBlock) -> Self {
        Self::Code(block)
    }
}

impl From<Declaration> for Arg {
    fn from(declaration: Declaration) -> Self {
        Self::Declaration(Box::new(declaration))
    }
}

/// How a template argument is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Placeholder {
    Literal,
    Str,
    Type,
    Name,
}

impl Placeholder {
    fn from_token(token: char) -> Option<Self> {
        match token {
            'L' => Some(Self::Literal),
            'S' => Some(Self::Str),
            'T' => Some(Self::Type),
            'N' => Some(Self::Name),
            _ => None,
        }
    }

    fn accepts(&self, arg: &Arg) -> std::result::Result<(), String> {
        match (self, arg) {
            (Self::Literal, _) => Ok(()),
            (Self::Str, Arg::Str(_) | Arg::Literal(_)) => Ok(()),
            (Self::Type, Arg::Type(_)) => Ok(()),
            (Self::Name, Arg::Name(name) | Arg::Literal(name)) if is_valid_identifier(name) => {
                Ok(())
            }
            (Self::Name, Arg::Declaration(declaration)) if declaration.name().is_some() => Ok(()),
            (Self::Name, Arg::Name(name) | Arg::Literal(name)) => {
                Err(format!("'{name}' is not a valid name for $N"))
            }
            (placeholder, arg) => Err(format!(
                "expected {} argument for {}, got {}",
                placeholder.expected(),
                placeholder.token(),
                describe(arg)
            )),
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Literal => "$L",
            Self::Str => "$S",
            Self::Type => "$T",
            Self::Name => "$N",
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::Literal => "any",
            Self::Str => "a string",
            Self::Type => "a type",
            Self::Name => "a name",
        }
    }
}

fn describe(arg: &Arg) -> &'static str {
    match arg {
        Arg::Literal(_) => "a literal",
        Arg::Str(_) => "a string",
        Arg::Type(_) => "a type",
        Arg::Name(_) => "a name",
        Arg::Code(_) => "a code block",
        Arg::Declaration(_) => "a declaration",
    }
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Segment {
    Text(String),
    Arg(Placeholder, Arg),
    Indent,
    Unindent,
    StatementStart,
    StatementEnd,
}

/// A parsed code template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    segments: Vec<Segment>,
}

impl CodeBlock {
    /// Parse a template and bind its arguments.
    ///
    /// Fails with [`Error::Template`] on a dangling or unknown `$` token, a
    /// missing or unused argument, or an argument of the wrong kind.
    pub fn of(format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        let mut block = Self::default();
        block.push_format(format, args)?;
        Ok(block)
    }

    /// Start building a block.
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Continue building from this block.
    pub fn to_builder(&self) -> CodeBlockBuilder {
        CodeBlockBuilder {
            block: self.clone(),
        }
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push_format(&mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<()> {
        let error = |message: String| Error::Template {
            format: format.to_string(),
            message,
        };

        let mut args = args.into_iter();
        let mut consumed = 0usize;
        let mut text = String::new();
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            if c != '$' {
                text.push(c);
                continue;
            }

            let token = chars
                .next()
                .ok_or_else(|| error("dangling '$' at end of template".to_string()))?;
            let segment = match token {
                '$' => {
                    text.push('$');
                    continue;
                }
                '>' => Segment::Indent,
                '<' => Segment::Unindent,
                '[' => Segment::StatementStart,
                ']' => Segment::StatementEnd,
                other => {
                    let placeholder = Placeholder::from_token(other)
                        .ok_or_else(|| error(format!("invalid token '${other}'")))?;
                    let arg = args.next().ok_or_else(|| {
                        error(format!(
                            "argument {} is missing for {}",
                            consumed + 1,
                            placeholder.token()
                        ))
                    })?;
                    consumed += 1;
                    placeholder.accepts(&arg).map_err(error)?;
                    Segment::Arg(placeholder, arg)
                }
            };

            if !text.is_empty() {
                self.push_text(&std::mem::take(&mut text));
            }
            self.segments.push(segment);
        }

        if !text.is_empty() {
            self.push_text(&text);
        }

        let unused = args.count();
        if unused > 0 {
            return Err(error(format!(
                "{unused} unused argument{}",
                if unused == 1 { "" } else { "s" }
            )));
        }

        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }
}

/// Writes the block with default settings. Emission errors are written as a
/// comment in place of the code.
impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::new(RenderConfig::default());
        match writer.emit_code(self) {
            Ok(_) => f.write_str(writer.as_str()),
            Err(e) => write!(f, "/* unrenderable code: {e} */"),
        }
    }
}

/// Fluent builder for [`CodeBlock`]s.
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    block: CodeBlock,
}

impl CodeBlockBuilder {
    /// Append a template.
    pub fn add(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        self.block.push_format(format, args)?;
        Ok(self)
    }

    /// Append a statement: the template followed by `;` and a line break.
    pub fn add_statement(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.block.segments.push(Segment::StatementStart);
        self.block.push_format(format, args)?;
        self.block.push_text(";\n");
        self.block.segments.push(Segment::StatementEnd);
        Ok(self)
    }

    /// Open a braced control flow such as `if (x)` and indent.
    pub fn begin_control_flow(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.block.push_format(format, args)?;
        self.block.push_text(" {\n");
        self.block.segments.push(Segment::Indent);
        Ok(self)
    }

    /// Close the current control flow and open the next, such as `else`.
    pub fn next_control_flow(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        self.block.segments.push(Segment::Unindent);
        self.block.push_text("} ");
        self.block.push_format(format, args)?;
        self.block.push_text(" {\n");
        self.block.segments.push(Segment::Indent);
        Ok(self)
    }

    /// Close the current control flow.
    pub fn end_control_flow(mut self) -> Self {
        self.block.segments.push(Segment::Unindent);
        self.block.push_text("}\n");
        self
    }

    /// Append another block.
    pub fn add_code(mut self, block: CodeBlock) -> Self {
        for segment in block.segments {
            match segment {
                Segment::Text(text) => self.block.push_text(&text),
                other => self.block.segments.push(other),
            }
        }
        self
    }

    pub fn indent(mut self) -> Self {
        self.block.segments.push(Segment::Indent);
        self
    }

    pub fn unindent(mut self) -> Self {
        self.block.segments.push(Segment::Unindent);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    pub fn build(self) -> CodeBlock {
        self.block
    }
}
