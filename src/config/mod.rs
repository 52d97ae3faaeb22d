//! Configuration loading and merging
//!
//! Resolves the config file (explicit path or `config/jshint.yml` / `.jshintrc`
//! under the project root), parses it according to its format and merges it
//! over the built-in defaults.

pub mod error;
pub mod loader;
pub mod merge;
pub mod source;

pub use error::ConfigError;
pub use loader::{load_config, resolve_config_path, DEFAULT_CONFIG_CANDIDATES};
pub use merge::merge_with_defaults;
pub use source::{ConfigSource, RawConfig};
