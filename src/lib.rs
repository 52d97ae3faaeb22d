//! jshint-config: JSHint configuration resolution
//!
//! Loads a YAML config (`config/jshint.yml`) or a JSHint dotfile (`.jshintrc`),
//! merges it over the defaults and answers queries against the resulting
//! immutable [`Configuration`] snapshot.

pub mod config;
pub mod domain;
pub mod scan;

pub use config::{load_config, resolve_config_path, ConfigError, ConfigSource};
pub use domain::{Configuration, Globals, DEFAULT_SEARCH_PATHS};
pub use scan::{collect_targets, LintTarget, ScanError};
