//! Lint target discovery

pub mod targets;

pub use targets::{collect_targets, LintTarget, ScanError};
