use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;
use sprig_codegen::Declaration;
use sprig_core::{RenderConfig, is_valid_name};

use crate::{
    DeclarationDef, Error, Result, SourceContext,
    context::{ParseContext, find_value_span},
    convert,
};

/// Root manifest for sprig.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Indentation and package used when rendering
    #[serde(default)]
    pub render: RenderConfig,

    /// Top-level declarations, one per output file
    #[serde(default)]
    pub declarations: Vec<DeclarationDef>,

    #[serde(skip)]
    source: SourceContext,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "sprig.toml")
    }
}

impl Manifest {
    /// Parse a sprig.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a sprig.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let mut manifest: Self = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.source = source;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The source this manifest was parsed from.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Build every top-level declaration.
    pub fn declarations(&self) -> Result<Vec<Declaration>> {
        let ctx = ParseContext::new(&self.source);
        self.declarations
            .iter()
            .enumerate()
            .map(|(i, def)| convert::declaration(def, &ctx.index("declarations", i)))
            .collect()
    }

    /// Checks that span declarations: the package name and unique
    /// top-level names. Everything else is left to the builders.
    fn validate(&self) -> Result<()> {
        if let Some(package) = &self.render.package {
            if package.split('.').any(|segment| !is_valid_name(segment)) {
                return Err(self.source.validation_error(
                    format!("invalid package name '{package}'"),
                    find_value_span(self.source.src(), package),
                ));
            }
        }

        let mut seen = HashSet::new();
        for def in &self.declarations {
            if !seen.insert(def.name.as_str()) {
                return Err(self.source.validation_error(
                    format!("duplicate declaration '{}'", def.name),
                    find_value_span(self.source.src(), &def.name),
                ));
            }
        }
        Ok(())
    }
}
