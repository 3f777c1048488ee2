//! Check operation - manifest validation.

use std::path::Path;

use sprig_codegen::Declaration;
use sprig_manifest::{Manifest, Result};

use crate::reports::{CheckReport, DeclarationSummary};

/// Execute the check operation.
///
/// Builds every declaration so that builder rules are enforced, then
/// summarizes what was found.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let declarations = manifest.declarations()?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        package: manifest.render.package.clone(),
        declarations: declarations.iter().map(summarize).collect(),
    })
}

fn summarize(declaration: &Declaration) -> DeclarationSummary {
    DeclarationSummary {
        kind: declaration.kind().to_string(),
        name: declaration.name().unwrap_or_default().to_string(),
        enum_constants: declaration.enum_constants().len(),
        properties: declaration.properties().len(),
        functions: declaration.functions().len(),
        nested: declaration
            .nested_declarations()
            .iter()
            .map(summarize)
            .collect(),
    }
}
