use miette::SourceSpan;

use crate::{Error, SourceContext};

/// Location inside a manifest while it is converted into declarations.
///
/// Carries the source for error reporting and the dotted path of the entry
/// being converted, e.g. `declarations[0].functions[2]`.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(&source);
/// let nested = ctx.index("declarations", 0).index("nested", 1);
/// assert_eq!(nested.path_string(), "declarations[0].nested[1]");
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Descend into the `index`-th entry of an array table.
    pub fn index(&self, field: &str, index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(format!("{field}[{index}]"));
        Self {
            source: self.source,
            path,
        }
    }

    /// Descend into a named field.
    pub fn field(&self, field: &str) -> Self {
        let mut path = self.path.clone();
        path.push(field.to_string());
        Self {
            source: self.source,
            path,
        }
    }

    /// The current path joined with dots.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Wrap a codegen error, pointing at `needle` in the source if found.
    pub fn error(&self, needle: &str, source: sprig_codegen::Error) -> Box<Error> {
        self.source
            .declaration_error(self.path_string(), find_value_span(self.source.src(), needle), source)
    }
}

/// Find a quoted string value in the TOML source.
///
/// Returns the span of the text between the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let quoted = format!("\"{value}\"");
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_string() {
        let source = SourceContext::new("", "sprig.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.path_string(), "");

        let nested = ctx
            .index("declarations", 0)
            .index("nested", 1)
            .field("superclass");
        assert_eq!(nested.path_string(), "declarations[0].nested[1].superclass");
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = \"Greeter\"\nkind = \"class\"";
        assert_eq!(
            find_value_span(src, "Greeter"),
            Some(SourceSpan::from((8, 7)))
        );
        assert_eq!(find_value_span(src, "Missing"), None);
        assert_eq!(find_value_span(src, ""), None);
    }
}
