//! Injector configuration.
//!
//! [`InjectOptions`] is the partial, deserializable options object callers
//! and config files provide. [`InjectConfig`] is the immutable, fully
//! resolved configuration an engine is built from: defaults applied and the
//! directory anchored to the working directory.
//!
//! Defaults:
//!
//! | option | default |
//! |---|---|
//! | `directory` | `html/injection/` |
//! | `replacements` | `{}` |
//! | `scope` | `pre` |
//! | `exactMatch` | `true` |
//! | `cacheEnabled` | `true` |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIRECTORY;
use crate::errors::Result;
use crate::types::{DirectiveScope, ReplacementMap};

/// Partial injector options. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InjectOptions {
    /// Directory holding injectable files, relative to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Variable replacements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<ReplacementMap>,
    /// Placeholder syntax to recognise.
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub scope: Option<DirectiveScope>,
    /// Match filenames exactly (extension included) instead of by stem.
    #[serde(alias = "exact", skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    /// Reuse file contents per identifier within one engine.
    #[serde(alias = "cache", skip_serializing_if = "Option::is_none")]
    pub cache_enabled: Option<bool>,
}

impl InjectOptions {
    /// Options with every field set to its default.
    pub fn defaults() -> Self {
        Self {
            directory: Some(PathBuf::from(DEFAULT_DIRECTORY)),
            replacements: Some(ReplacementMap::new()),
            scope: Some(DirectiveScope::default()),
            exact_match: Some(true),
            cache_enabled: Some(true),
        }
    }

    /// Layer `other` over `self`.
    ///
    /// Fields set in `other` win. Replacement maps are merged per key, with
    /// `other`'s values taking precedence.
    #[must_use]
    pub fn overlay(mut self, other: InjectOptions) -> Self {
        if other.directory.is_some() {
            self.directory = other.directory;
        }
        if let Some(replacements) = other.replacements {
            self.replacements
                .get_or_insert_with(ReplacementMap::new)
                .extend(replacements);
        }
        if other.scope.is_some() {
            self.scope = other.scope;
        }
        if other.exact_match.is_some() {
            self.exact_match = other.exact_match;
        }
        if other.cache_enabled.is_some() {
            self.cache_enabled = other.cache_enabled;
        }
        self
    }

    /// Set the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: DirectiveScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Set the directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Add one variable replacement.
    #[must_use]
    pub fn with_replacement(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self
            .replacements
            .get_or_insert_with(ReplacementMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set exact filename matching.
    #[must_use]
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = Some(exact_match);
        self
    }

    /// Enable or disable the file cache.
    #[must_use]
    pub fn with_cache_enabled(mut self, cache_enabled: bool) -> Self {
        self.cache_enabled = Some(cache_enabled);
        self
    }
}

/// Fully resolved, immutable injector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectConfig {
    directory: PathBuf,
    replacements: ReplacementMap,
    scope: DirectiveScope,
    exact_match: bool,
    cache_enabled: bool,
}

impl InjectConfig {
    /// Apply defaults to `options` and anchor the directory to the process
    /// working directory.
    pub fn from_options(options: InjectOptions) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve(options, &cwd))
    }

    /// Apply defaults to `options` and anchor the directory to `base`.
    ///
    /// An absolute directory is kept as-is.
    pub fn resolve(options: InjectOptions, base: &Path) -> Self {
        let merged = InjectOptions::defaults().overlay(options);
        let directory = merged
            .directory
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));

        Self {
            directory: base.join(directory),
            replacements: merged.replacements.unwrap_or_default(),
            scope: merged.scope.unwrap_or_default(),
            exact_match: merged.exact_match.unwrap_or(true),
            cache_enabled: merged.cache_enabled.unwrap_or(true),
        }
    }

    /// Directory holding injectable files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Variable replacements.
    pub fn replacements(&self) -> &ReplacementMap {
        &self.replacements
    }

    /// Recognised placeholder syntax.
    pub fn scope(&self) -> DirectiveScope {
        self.scope
    }

    /// Whether file placeholders must name the full filename.
    pub fn exact_match(&self) -> bool {
        self.exact_match
    }

    /// Whether file contents are cached per identifier.
    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }
}
