//! Targets command implementation

use anyhow::Result;
use clap::Args;

use super::utils::ConfigArgs;
use jshint_config::collect_targets;
use std::path::PathBuf;

#[derive(Args)]
pub struct TargetsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print absolute paths instead of paths relative to the project root
    #[arg(long)]
    pub absolute: bool,
}

pub fn run(args: TargetsArgs) -> Result<()> {
    let config = args.config.load()?;
    let targets = collect_targets(&args.config.root, &config)?;

    if targets.is_empty() {
        tracing::warn!(
            "No JavaScript files matched {:?} under {:?}",
            config.files(),
            config.search_paths()
        );
    }

    for target in targets {
        if args.absolute {
            println!("{}", absolute_path(target.path).display());
        } else {
            println!("{}", target.relative_path);
        }
    }
    Ok(())
}

fn absolute_path(path: PathBuf) -> PathBuf {
    match path.canonicalize() {
        Ok(absolute) => absolute,
        Err(err) => {
            tracing::warn!("Could not canonicalize {}: {}", path.display(), err);
            path
        }
    }
}
