//! Render configuration.

use serde::Deserialize;

use crate::Indent;

/// Settings that affect how declarations are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation for one nesting level.
    pub indent: Indent,
    /// Package the rendered declarations live in.
    ///
    /// Types from this package are written with their simple names.
    pub package: Option<String>,
}

impl RenderConfig {
    /// Set the indentation.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the package.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}
