//! Loading the bundled fixtures through the public API

use jshint_config::{load_config, ConfigError, Configuration, DEFAULT_SEARCH_PATHS};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn load_fixture(name: &str) -> Configuration {
    let path = fixture(name);
    load_config(Path::new(env!("CARGO_MANIFEST_DIR")), Some(&path)).expect("fixture loads")
}

#[test]
fn yaml_fixture_exposes_options() {
    let cfg = load_fixture("jshint.yml");

    assert_eq!(cfg.get("boss"), Some(&json!(true)));
    assert_eq!(cfg.get("browser"), Some(&json!(true)));
    assert_eq!(cfg.files(), ["**/*.js"]);
    assert!(cfg.excluded_search_paths().is_empty());
    assert_eq!(cfg.search_paths(), DEFAULT_SEARCH_PATHS.to_vec());

    let globals = serde_json::to_value(cfg.global_variables()).expect("globals to json");
    assert_eq!(globals, json!({"jQuery": true, "$": true}));
}

#[test]
fn yaml_fixture_lint_options_are_memoized() {
    let cfg = load_fixture("jshint.yml");

    let first = cfg.lint_options();
    let second = cfg.lint_options();
    assert!(std::ptr::eq(first, second));
    similar_asserts::assert_eq!(
        serde_json::Value::Object(first.clone()),
        json!({"boss": true, "browser": true})
    );
}

#[test]
fn dotfile_fixture_exposes_options_and_defaults() {
    let cfg = load_fixture(".jshintrc");

    assert_eq!(cfg.lint_options().get("camelcase"), Some(&json!(true)));
    assert_eq!(cfg.lint_options().get("plusplus"), Some(&json!(false)));
    assert!(!cfg.lint_options().contains_key("globals"));

    let globals = serde_json::to_value(cfg.global_variables()).expect("globals to json");
    assert_eq!(globals, json!({"jQuery": false, "$": true}));

    assert_eq!(cfg.files(), ["**/*.js"]);
    assert!(cfg.excluded_search_paths().is_empty());
}

#[test]
fn excluding_vendor_narrows_search_paths() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("jshint.yml");
    let mut content = fs::read_to_string(fixture("jshint.yml")).expect("read fixture");
    content.push_str("exclude_paths:\n  - vendor/assets/javascripts\n");
    fs::write(&path, content).expect("write");

    let cfg = load_config(tmp.path(), Some(&path)).expect("config");
    assert_eq!(cfg.excluded_search_paths(), ["vendor/assets/javascripts"]);
    assert_eq!(cfg.search_paths(), vec!["app/assets/javascripts", "lib/assets/javascripts"]);
}

#[test]
fn every_exclusion_subset_preserves_default_order() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("jshint.yml");

    for mask in 0..(1u8 << DEFAULT_SEARCH_PATHS.len()) {
        let excluded: Vec<&str> = DEFAULT_SEARCH_PATHS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, p)| *p)
            .collect();
        let content = serde_yaml::to_string(&json!({ "exclude_paths": excluded })).expect("yaml");
        fs::write(&path, content).expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        let expected: Vec<&str> =
            DEFAULT_SEARCH_PATHS.iter().copied().filter(|p| !excluded.contains(p)).collect();
        assert_eq!(cfg.search_paths(), expected, "mask {mask:03b}");
    }
}

#[test]
fn default_resolution_failure_names_first_candidate() {
    let tmp = TempDir::new().expect("tmp");
    let err = load_config(tmp.path(), None).expect_err("nothing on disk");

    assert!(matches!(err, ConfigError::FileAccess { .. }));
    assert!(err.path().ends_with("config/jshint.yml"));
}
