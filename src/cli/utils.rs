//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use jshint_config::{load_config, Configuration};
use std::path::PathBuf;

/// Where to find the project and its config file.
#[derive(Args)]
pub struct ConfigArgs {
    /// Project root used to resolve default config locations and search paths
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Config file to load instead of config/jshint.yml or .jshintrc
    #[arg(short, long, value_name = "FILE", env = "JSHINT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Configuration> {
        if !self.root.is_dir() {
            anyhow::bail!("Project root is not a directory: {}", self.root.display());
        }
        load_config(&self.root, self.config.as_deref()).with_context(|| {
            format!("Failed to load JSHint configuration for {}", self.root.display())
        })
    }
}
