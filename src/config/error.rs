//! Errors raised while loading a configuration file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Load failures. Every variant names the file that was attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed reading config file: {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON config: {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`globals` must map identifiers to booleans in {}", .path.display())]
    InvalidGlobals {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileAccess { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::InvalidGlobals { path, .. } => path,
        }
    }

    /// True for malformed content, false when the file could not be read.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::FileAccess { .. })
    }
}
