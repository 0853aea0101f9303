//! Core types for the injector.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Variable name → replacement text.
pub type ReplacementMap = HashMap<String, String>;

/// Which placeholder syntax an engine recognises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum DirectiveScope {
    /// Bare `${name}` placeholders.
    AnyTime,
    /// `$:pre{name}` placeholders (default).
    #[default]
    Pre,
    /// `$:post{name}` placeholders.
    Post,
}

impl DirectiveScope {
    /// Parse a scope name.
    ///
    /// Only `pre` and `post` (case-insensitive) select a scoped syntax; any
    /// other name selects [`DirectiveScope::AnyTime`].
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("pre") {
            Self::Pre
        } else if name.eq_ignore_ascii_case("post") {
            Self::Post
        } else {
            Self::AnyTime
        }
    }

    /// Directive infix between `$` and `{`, if any.
    pub fn infix(self) -> Option<&'static str> {
        match self {
            Self::AnyTime => None,
            Self::Pre => Some("pre"),
            Self::Post => Some("post"),
        }
    }
}

impl From<String> for DirectiveScope {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for DirectiveScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnyTime => write!(f, "any-time"),
            Self::Pre => write!(f, "pre"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// What a placeholder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A file in the injection directory.
    File,
    /// A key in the replacement map.
    Variable,
}

/// A parsed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// File or variable reference.
    pub kind: TokenKind,
    /// File name/stem, or variable key without its `$`.
    pub identifier: String,
}

/// A placeholder occurrence in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Matched text, e.g. `$:pre{footer}`.
    pub text: &'a str,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset of the match end (exclusive).
    pub end: usize,
}
