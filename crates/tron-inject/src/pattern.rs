//! Placeholder recognition.
//!
//! Each [`DirectiveScope`] has one compiled pattern. The directive infix is
//! matched case-insensitively; identifiers are limited to ASCII letters,
//! digits, `.`, `_` and `-`, optionally prefixed by a single `$`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DirectiveScope, RawMatch};

static ANY_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{\$?[A-Za-z0-9_.\-]+\}").unwrap());

static PRE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$:(?i-u:pre)\{\$?[A-Za-z0-9_.\-]+\}").unwrap());

static POST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$:(?i-u:post)\{\$?[A-Za-z0-9_.\-]+\}").unwrap());

/// The placeholder pattern for a scope.
pub fn pattern_for(scope: DirectiveScope) -> &'static Regex {
    match scope {
        DirectiveScope::AnyTime => &*ANY_TIME_PATTERN,
        DirectiveScope::Pre => &*PRE_PATTERN,
        DirectiveScope::Post => &*POST_PATTERN,
    }
}

/// Lazily find every placeholder of `scope` in `document`, left to right.
pub fn find_placeholders(
    document: &str,
    scope: DirectiveScope,
) -> impl Iterator<Item = RawMatch<'_>> {
    pattern_for(scope).find_iter(document).map(|m| RawMatch {
        text: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}
