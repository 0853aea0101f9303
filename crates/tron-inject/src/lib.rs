//! # tron-inject
//!
//! Placeholder-driven content injection for document pipelines.
//!
//! Documents carry placeholders that name either a file (whose trimmed
//! contents replace the placeholder) or a variable from a caller-supplied
//! replacement map. Each engine recognises exactly one placeholder syntax:
//!
//! | scope | file | variable |
//! |---|---|---|
//! | `any-time` | `${name}` | `${$name}` |
//! | `pre` | `$:pre{name}` | `$:pre{$name}` |
//! | `post` | `$:post{name}` | `$:post{$name}` |
//!
//! Placeholders that resolve to nothing are removed.
//!
//! ## Module Overview
//!
//! - [`pattern`] — Per-scope placeholder patterns and raw match extraction
//! - [`token`] — Classify a raw match as a file or variable reference
//! - [`resolver`] — File lookup (exact or by stem) with cache, variable lookup
//! - [`engine`] — Substitution over one document
//! - [`config`] — Options, defaults, and the immutable engine configuration
//! - [`loader`] — JSON config files with env var overrides
//! - [`document`] — Pipeline adapter for null / buffered / streamed documents
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tron_inject::config::{InjectConfig, InjectOptions};
//! use tron_inject::engine::InjectionEngine;
//!
//! let config = InjectConfig::from_options(InjectOptions::default()).unwrap();
//! let mut engine = InjectionEngine::new(config);
//! println!("{}", engine.process("<p>$:pre{greeting}</p>"));
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod document;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod pattern;
pub mod resolver;
pub mod token;
pub mod types;

pub use config::{InjectConfig, InjectOptions};
pub use document::{Document, DocumentContents, Injector};
pub use engine::InjectionEngine;
pub use errors::{InjectError, Result};
pub use types::{DirectiveScope, PlaceholderToken, ReplacementMap, TokenKind};
