//! Expand the configured globs into concrete JavaScript files

use crate::domain::Configuration;
use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid file pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A file selected for linting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintTarget {
    pub path: PathBuf,
    /// Path relative to the project root, always `/`-separated.
    pub relative_path: String,
}

/// Join every `files` pattern onto every search path and expand it.
///
/// Patterns are visited in config order, search paths in search order; files
/// matched by one pattern come out sorted. A file matched more than once is
/// reported at its first position only. Search paths missing on disk are
/// skipped.
pub fn collect_targets(
    project_root: &Path,
    config: &Configuration,
) -> Result<Vec<LintTarget>, ScanError> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for pattern in config.files() {
        for search_path in config.search_paths() {
            let joined = join_pattern(search_path, pattern);
            let matcher = compile(&joined)?;

            let dir = project_root.join(search_path);
            if !dir.is_dir() {
                tracing::debug!("Skipping missing search path {}", dir.display());
                continue;
            }

            let mut matched = expand(project_root, &dir, &matcher);
            matched.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
            tracing::debug!("{} matched {} file(s)", joined, matched.len());

            for target in matched {
                if seen.insert(target.relative_path.clone()) {
                    targets.push(target);
                }
            }
        }
    }

    Ok(targets)
}

fn join_pattern(search_path: &str, pattern: &str) -> String {
    format!("{}/{}", search_path.trim_end_matches('/'), pattern.trim_start_matches('/'))
}

fn compile(pattern: &str) -> Result<GlobMatcher, ScanError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| ScanError::InvalidGlob { pattern: pattern.to_string(), source })
}

fn expand(project_root: &Path, dir: &Path, matcher: &GlobMatcher) -> Vec<LintTarget> {
    let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| !is_hidden(entry));

    let mut matched = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(relative_path) = relative_slash_path(project_root, entry.path()) else {
            continue;
        };
        if matcher.is_match(&relative_path) {
            matched.push(LintTarget { path: entry.path().to_path_buf(), relative_path });
        }
    }
    matched
}

// Dotfiles and dot-directories never match a glob wildcard.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(relative.to_str()?.replace('\\', "/"))
}
