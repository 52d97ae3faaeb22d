//! Core data types: the resolved JSHint configuration snapshot.

use once_cell::sync::OnceCell;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Option key holding the globals allow-list inside the `options` block.
pub const GLOBALS_KEY: &str = "globals";

/// Directories scanned for JavaScript sources, in scan order.
pub const DEFAULT_SEARCH_PATHS: [&str; 3] =
    ["app/assets/javascripts", "vendor/assets/javascripts", "lib/assets/javascripts"];

/// Glob patterns used when the config file does not define `files`.
pub fn default_files() -> Vec<String> {
    vec!["**/*.js".to_string()]
}

/// Identifier name -> writable (`true`) or read-only (`false`).
pub type Globals = BTreeMap<String, bool>;

/// Immutable configuration snapshot produced by a single load.
///
/// Built once from the merged file contents; every query is answered from the
/// stored fields. `lint_options` is derived lazily and cached for the lifetime
/// of the snapshot.
#[derive(Debug, Clone)]
pub struct Configuration {
    path: PathBuf,
    files: Vec<String>,
    exclude_paths: Vec<String>,
    options: Map<String, Value>,
    globals: Option<Globals>,
    extra: Map<String, Value>,
    lint_options: OnceCell<Map<String, Value>>,
}

impl Configuration {
    pub(crate) fn new(
        path: PathBuf,
        files: Vec<String>,
        exclude_paths: Vec<String>,
        options: Map<String, Value>,
        globals: Option<Globals>,
        extra: Map<String, Value>,
    ) -> Self {
        Self { path, files, exclude_paths, options, globals, extra, lint_options: OnceCell::new() }
    }

    /// The file this snapshot was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value of a single lint option, exactly as parsed.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// The full `options` block, `globals` included.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Declared global variables, if the options block has a `globals` entry.
    pub fn global_variables(&self) -> Option<&Globals> {
        self.globals.as_ref()
    }

    /// Options handed to the linter: the options block without `globals`.
    pub fn lint_options(&self) -> &Map<String, Value> {
        self.lint_options.get_or_init(|| {
            self.options
                .iter()
                .filter(|(key, _)| key.as_str() != GLOBALS_KEY)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
    }

    /// Glob patterns of the files to lint, relative to each search path.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn excluded_search_paths(&self) -> &[String] {
        &self.exclude_paths
    }

    pub fn default_search_paths(&self) -> &'static [&'static str] {
        &DEFAULT_SEARCH_PATHS
    }

    /// Default search paths minus the excluded ones, in default order.
    ///
    /// Exclusion is exact string equality; no normalization or globbing.
    pub fn search_paths(&self) -> Vec<&'static str> {
        DEFAULT_SEARCH_PATHS
            .iter()
            .copied()
            .filter(|path| !self.exclude_paths.iter().any(|excluded| excluded == path))
            .collect()
    }

    /// Top-level keys the loader does not interpret.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Configuration", 6)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("files", &self.files)?;
        state.serialize_field("exclude_paths", &self.exclude_paths)?;
        state.serialize_field("search_paths", &self.search_paths())?;
        state.serialize_field("lint_options", self.lint_options())?;
        state.serialize_field("globals", &self.globals)?;
        state.end()
    }
}
