//! Options loading with environment variable overrides.
//!
//! Loading flow:
//! 1. Start with [`InjectOptions::defaults()`]
//! 2. If the config file exists, layer its values over the defaults
//! 3. Apply `TRON_INJECT_*` environment overrides (highest priority)
//!
//! Layering follows [`InjectOptions::overlay`]: set fields replace, unset or
//! `null` fields keep the lower layer, replacement maps merge per key.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::InjectOptions;
use crate::constants::{ENV_CACHE, ENV_DIRECTORY, ENV_EXACT, ENV_SCOPE};
use crate::errors::{InjectError, Result};
use crate::types::DirectiveScope;

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "tron-inject.json";

/// Resolve the path to the default config file (`./tron-inject.json`).
pub fn options_path() -> PathBuf {
    PathBuf::from(CONFIG_FILENAME)
}

/// Load options from the default path with env var overrides.
pub fn load_options() -> Result<InjectOptions> {
    load_options_from_path(&options_path())
}

/// Load options from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults (plus env overrides). If the
/// file is not a JSON object, returns an error.
pub fn load_options_from_path(path: &Path) -> Result<InjectOptions> {
    let mut options = InjectOptions::defaults();

    if path.exists() {
        debug!(?path, "loading inject options from file");
        let content = std::fs::read_to_string(path)?;
        options = options.overlay(parse_options(&content)?);
    } else {
        debug!(?path, "inject config not found, using defaults");
    }

    apply_env_overrides(&mut options);
    Ok(options)
}

/// Parse a JSON config document into options.
pub fn parse_options(content: &str) -> Result<InjectOptions> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(InjectError::InvalidValue(
            "config root must be a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Apply environment variable overrides to loaded options.
///
/// Invalid boolean values are ignored with a warning.
pub fn apply_env_overrides(options: &mut InjectOptions) {
    if let Some(v) = read_env_string(ENV_DIRECTORY) {
        options.directory = Some(PathBuf::from(v));
    }
    if let Some(v) = read_env_string(ENV_SCOPE) {
        options.scope = Some(DirectiveScope::from_name(&v));
    }
    if let Some(v) = read_env_bool(ENV_EXACT) {
        options.exact_match = Some(v);
    }
    if let Some(v) = read_env_bool(ENV_CACHE) {
        options.cache_enabled = Some(v);
    }
}

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_bool(name: &str) -> Option<bool> {
    let val = std::env::var(name).ok()?;
    let result = parse_bool(&val);
    if result.is_none() {
        warn!(key = name, value = %val, "invalid boolean env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── load_options_from_path ──────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let options = load_options_from_path(Path::new("/nonexistent/tron-inject.json")).unwrap();
        let defaults = InjectOptions::defaults();
        assert_eq!(options.replacements, defaults.replacements);
        // env overrides may apply to the rest; the file layer contributes nothing
        assert!(options.scope.is_some());
        assert!(options.exact_match.is_some());
    }

    #[test]
    fn load_partial_json_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron-inject.json");
        std::fs::write(&path, r#"{"replacements": {"title": "Docs"}}"#).unwrap();

        let options = load_options_from_path(&path).unwrap();
        assert_eq!(options.replacements.unwrap()["title"], "Docs");
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron-inject.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_options_from_path(&path);
        assert!(matches!(result.unwrap_err(), InjectError::Json(_)));
    }

    #[test]
    fn load_non_object_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron-inject.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let result = load_options_from_path(&path);
        assert!(matches!(result.unwrap_err(), InjectError::InvalidValue(_)));
    }

    // ── parse_options ───────────────────────────────────────────────

    #[test]
    fn parse_full_document() {
        let options = parse_options(
            r#"{"directory": "fragments", "type": "post", "exact": false, "cache": false}"#,
        )
        .unwrap();
        assert_eq!(options.directory, Some(PathBuf::from("fragments")));
        assert_eq!(options.scope, Some(DirectiveScope::Post));
        assert_eq!(options.exact_match, Some(false));
        assert_eq!(options.cache_enabled, Some(false));
    }

    #[test]
    fn parse_wrong_type_returns_error() {
        let result = parse_options(r#"{"exactMatch": "nope"}"#);
        assert!(matches!(result.unwrap_err(), InjectError::Json(_)));
    }

    #[test]
    fn parsed_options_layer_over_defaults() {
        let options = InjectOptions::defaults().overlay(parse_options(r#"{"scope": "post"}"#).unwrap());
        assert_eq!(options.scope, Some(DirectiveScope::Post));
        assert_eq!(options.exact_match, Some(true));
        assert_eq!(options.cache_enabled, Some(true));
    }

    // ── parse_bool ──────────────────────────────────────────────────

    #[test]
    fn parse_bool_true_variants() {
        for val in &["true", "1", "yes", "on", "TRUE", "Yes", "ON"] {
            assert_eq!(parse_bool(val), Some(true), "failed for {val}");
        }
    }

    #[test]
    fn parse_bool_false_variants() {
        for val in &["false", "0", "no", "off", "FALSE", "No", "OFF"] {
            assert_eq!(parse_bool(val), Some(false), "failed for {val}");
        }
    }

    #[test]
    fn parse_bool_invalid() {
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("2"), None);
    }
}
