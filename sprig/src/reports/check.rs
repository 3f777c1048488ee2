//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Package from the render table.
    pub package: Option<String>,
    /// One summary per top-level declaration.
    pub declarations: Vec<DeclarationSummary>,
}

/// Kind, name and member counts of a built declaration.
#[derive(Debug)]
pub struct DeclarationSummary {
    pub kind: String,
    pub name: String,
    pub enum_constants: usize,
    pub properties: usize,
    pub functions: usize,
    pub nested: Vec<DeclarationSummary>,
}

impl DeclarationSummary {
    fn describe(&self) -> String {
        let counts = [
            (self.enum_constants, "constant"),
            (self.properties, "property"),
            (self.functions, "function"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, noun)| plural(count, noun))
        .collect::<Vec<_>>();

        if counts.is_empty() {
            format!("{} {}", self.kind, self.name)
        } else {
            format!("{} {} ({})", self.kind, self.name, counts.join(", "))
        }
    }

    fn render_at(&self, out: &mut dyn Output, depth: usize) {
        out.list_item(depth, &self.describe());
        for nested in &self.nested {
            nested.render_at(out, depth + 1);
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {}", noun),
        (_, "property") => format!("{} properties", count),
        _ => format!("{} {}s", count, noun),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        if let Some(package) = &self.package {
            out.key_value("Package", package);
        }
        out.section(&format!("Declarations ({})", self.declarations.len()));
        for declaration in &self.declarations {
            declaration.render_at(out, 0);
        }
    }
}
