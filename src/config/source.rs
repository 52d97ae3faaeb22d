//! Config file formats and their parsers

use super::ConfigError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// File name suffix of the linter-native JSON dotfile.
pub const DOTFILE_SUFFIX: &str = ".jshintrc";

/// Top-level contents of a config file before defaults are applied.
///
/// `None` means the key was absent, so the default survives the merge.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_paths: Option<Vec<String>>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Format of a config file, decided once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// YAML with optional top-level `files`, `exclude_paths` and `options`.
    Yaml,
    /// `.jshintrc`: one JSON object holding only lint options.
    JsonDotfile,
}

impl ConfigSource {
    pub fn detect(path: &Path) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with(DOTFILE_SUFFIX) {
            Self::JsonDotfile
        } else {
            Self::Yaml
        }
    }

    pub fn parse(self, content: &[u8], path: &Path) -> Result<RawConfig, ConfigError> {
        match self {
            Self::Yaml => parse_yaml(content, path),
            Self::JsonDotfile => parse_dotfile(content, path),
        }
    }
}

fn parse_yaml(content: &[u8], path: &Path) -> Result<RawConfig, ConfigError> {
    let yaml_error = |source| ConfigError::Yaml { path: path.to_path_buf(), source };

    let raw: serde_yaml::Value = serde_yaml::from_slice(content).map_err(yaml_error)?;

    // An empty document carries no overrides.
    if raw.is_null() {
        return Ok(RawConfig::default());
    }

    serde_yaml::from_value(raw).map_err(yaml_error)
}

fn parse_dotfile(content: &[u8], path: &Path) -> Result<RawConfig, ConfigError> {
    let options: Map<String, Value> = serde_json::from_slice(content)
        .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;

    Ok(RawConfig { options: Some(options), ..RawConfig::default() })
}
