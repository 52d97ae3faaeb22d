//! Config file discovery and loading

use super::{merge_with_defaults, ConfigError, ConfigSource};
use crate::domain::Configuration;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config locations, relative to the project root, in lookup order.
pub const DEFAULT_CONFIG_CANDIDATES: [&str; 2] = ["config/jshint.yml", ".jshintrc"];

/// Pick the file to load.
///
/// An explicit path is used as given. Otherwise the first existing default
/// candidate wins; when none exists the first candidate is returned anyway so
/// the read error names a real location.
pub fn resolve_config_path(project_root: &Path, config_path: Option<&Path>) -> PathBuf {
    if let Some(path) = config_path {
        return path.to_path_buf();
    }

    let candidates: Vec<PathBuf> =
        DEFAULT_CONFIG_CANDIDATES.iter().map(|candidate| project_root.join(candidate)).collect();

    match candidates.iter().find(|path| path.exists()) {
        Some(found) => {
            tracing::debug!("Found config: {}", found.display());
            found.clone()
        }
        None => {
            tracing::debug!(
                "No config found under {}; falling back to {}",
                project_root.display(),
                candidates[0].display()
            );
            candidates[0].clone()
        }
    }
}

/// Read, parse and merge one config file into a snapshot.
///
/// Read and parse failures are returned as-is; no default configuration is
/// substituted.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
) -> Result<Configuration, ConfigError> {
    let path = resolve_config_path(project_root, config_path);

    // Decoding happens in the parser so bad bytes surface as a parse error.
    let content =
        fs::read(&path).map_err(|source| ConfigError::FileAccess { path: path.clone(), source })?;

    let source = ConfigSource::detect(&path);
    tracing::debug!("Parsing {} as {:?}", path.display(), source);

    let raw = source.parse(&content, &path)?;
    merge_with_defaults(&path, raw)
}
