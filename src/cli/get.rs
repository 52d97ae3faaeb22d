//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::ConfigArgs;

#[derive(Args)]
pub struct GetArgs {
    /// Lint option name, e.g. `eqeqeq` or `globals`
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let config = args.config.load()?;
    match config.get(&args.key) {
        Some(value) => {
            println!("{}", serde_json::to_string(value)?);
            Ok(())
        }
        None => anyhow::bail!("Option not set: {} (in {})", args.key, config.path().display()),
    }
}
