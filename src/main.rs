//! jshint-config: resolve JSHint configuration for asset-pipeline projects
//!
//! Loads `config/jshint.yml` or `.jshintrc`, merges it with the built-in
//! defaults and reports lint options, globals and lint targets.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
