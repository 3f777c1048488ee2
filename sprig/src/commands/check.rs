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
pub struct CheckCommand {
    /// Path to sprig.toml (defaults to ./sprig.toml)
    #[arg(short, long, default_value = "sprig.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(&manifest, &self.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
