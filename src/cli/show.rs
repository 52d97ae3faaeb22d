//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::utils::ConfigArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Emit compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = args.config.load()?;
    let rendered = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{rendered}");
    Ok(())
}
