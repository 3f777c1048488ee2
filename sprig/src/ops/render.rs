//! Render operation - declarations to Java source files.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use sprig_codegen::Declaration;
use sprig_core::RenderConfig;

use crate::reports::{RenderReport, RenderedFile};

/// Execute the render operation.
///
/// With an output directory each declaration is written to
/// `<output>/<package path>/<Name>.java`; otherwise the files are only
/// collected for printing.
#[tracing::instrument(skip_all, fields(count = declarations.len()))]
pub fn render(
    declarations: &[Declaration],
    config: &RenderConfig,
    output: Option<&Path>,
) -> Result<RenderReport> {
    let files = declarations
        .iter()
        .map(|declaration| source_file(declaration, config))
        .collect::<Result<Vec<_>>>()?;

    if let Some(dir) = output {
        for file in &files {
            let path = dir.join(&file.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &file.content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote source file");
        }
    }

    Ok(RenderReport {
        output_dir: output.map(Path::to_path_buf),
        files,
    })
}

/// One compilation unit: the package statement followed by the declaration.
fn source_file(declaration: &Declaration, config: &RenderConfig) -> Result<RenderedFile> {
    let name = declaration
        .name()
        .ok_or_else(|| eyre!("Top-level declarations must be named"))?;
    let body = declaration
        .render_with(config)
        .wrap_err_with(|| format!("Failed to render {name}"))?;

    let mut path = PathBuf::new();
    let mut content = String::new();
    if let Some(package) = &config.package {
        path.extend(package.split('.'));
        content.push_str(&format!("package {package};\n\n"));
    }
    path.push(format!("{name}.java"));
    content.push_str(&body);

    Ok(RenderedFile { path, content })
}

#[cfg(test)]
mod tests {
    use sprig_codegen::{Modifier, PrimitiveType, PropertySpec};

    use super::*;

    fn point() -> Declaration {
        Declaration::class_builder("Point")
            .unwrap()
            .add_modifiers([Modifier::Public])
            .unwrap()
            .add_property(
                PropertySpec::builder(PrimitiveType::Int, "x")
                    .modifier(Modifier::Private)
                    .build()
                    .unwrap(),
            )
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_without_package() {
        let report = render(&[point()], &RenderConfig::default(), None).unwrap();
        assert!(report.output_dir.is_none());
        assert_eq!(report.files[0].path, PathBuf::from("Point.java"));
        assert_eq!(
            report.files[0].content,
            "public class Point {\n  private int x;\n}\n"
        );
    }

    #[test]
    fn test_render_writes_package_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::default().package("com.example.geometry");

        let report = render(&[point()], &config, Some(dir.path())).unwrap();
        assert_eq!(
            report.files[0].path,
            Path::new("com").join("example").join("geometry").join("Point.java")
        );

        let written = std::fs::read_to_string(dir.path().join(&report.files[0].path)).unwrap();
        assert_eq!(
            written,
            "package com.example.geometry;\n\npublic class Point {\n  private int x;\n}\n"
        );
    }
}
