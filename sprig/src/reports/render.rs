//! Render command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from rendering a manifest.
#[derive(Debug)]
pub struct RenderReport {
    /// Directory the files were written to, if any.
    pub output_dir: Option<PathBuf>,
    /// Rendered files, in declaration order.
    pub files: Vec<RenderedFile>,
}

/// A rendered compilation unit.
#[derive(Debug)]
pub struct RenderedFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.output_dir {
            Some(dir) => {
                out.key_value("Rendered into", &dir.display().to_string());
                for file in &self.files {
                    out.added_item(&file.path.display().to_string());
                }
            }
            None => {
                for (i, file) in self.files.iter().enumerate() {
                    if i > 0 {
                        out.newline();
                    }
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn files() -> Vec<RenderedFile> {
        vec![
            RenderedFile {
                path: PathBuf::from("A.java"),
                content: "class A {\n}\n".into(),
            },
            RenderedFile {
                path: PathBuf::from("B.java"),
                content: "class B {\n}\n".into(),
            },
        ]
    }

    #[test]
    fn test_preview_prints_each_file() {
        let report = RenderReport {
            output_dir: None,
            files: files(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["── A.java ──", "class A {", "}", "", "── B.java ──", "class B {", "}"]
        );
    }

    #[test]
    fn test_written_lists_paths() {
        let report = RenderReport {
            output_dir: Some(PathBuf::from("out")),
            files: files(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["Rendered into: out", "  + A.java", "  + B.java"]);
    }
}
