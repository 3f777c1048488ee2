use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprig_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to sprig.toml (defaults to ./sprig.toml)
    #[arg(short, long, default_value = "sprig.toml")]
    pub config: PathBuf,

    /// Write one `.java` file per declaration under this directory
    /// instead of printing to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let declarations = manifest.declarations().unwrap_or_exit();
        let report = ops::render(&declarations, &manifest.render, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
