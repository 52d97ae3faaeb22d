//! Shallow merge of parsed file contents over the defaults

use super::{ConfigError, RawConfig};
use crate::domain::{default_files, Configuration, Globals, GLOBALS_KEY};
use serde_json::Value;
use std::path::Path;

/// Build a snapshot from parsed contents.
///
/// Each top-level key present in the file replaces the default wholesale;
/// nested structures are never merged.
pub fn merge_with_defaults(path: &Path, raw: RawConfig) -> Result<Configuration, ConfigError> {
    let RawConfig { files, exclude_paths, options, extra } = raw;

    let options = options.unwrap_or_default();
    let globals = match options.get(GLOBALS_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(serde_json::from_value::<Globals>(value.clone()).map_err(
            |source| ConfigError::InvalidGlobals { path: path.to_path_buf(), source },
        )?),
    };

    Ok(Configuration::new(
        path.to_path_buf(),
        files.unwrap_or_else(default_files),
        exclude_paths.unwrap_or_default(),
        options,
        globals,
        extra,
    ))
}
