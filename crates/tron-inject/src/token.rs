//! Placeholder token parsing.
//!
//! Turns the raw text of a match (`$:pre{$title}`) into a [`PlaceholderToken`]
//! by stripping the directive wrapper and classifying the inner identifier.

use crate::types::{PlaceholderToken, TokenKind};

/// Parse the raw text of one placeholder.
///
/// Returns `None` if `raw` is not a well-formed placeholder of any scope.
pub fn parse_token(raw: &str) -> Option<PlaceholderToken> {
    let rest = raw.strip_prefix('$')?;
    let (directive, body) = rest.split_once('{')?;
    if !is_directive(directive) {
        return None;
    }
    let inner = body.strip_suffix('}')?;

    let (kind, identifier) = match inner.strip_prefix('$') {
        Some(key) => (TokenKind::Variable, key),
        None => (TokenKind::File, inner),
    };

    if identifier.is_empty() || !identifier.chars().all(is_identifier_char) {
        return None;
    }

    Some(PlaceholderToken {
        kind,
        identifier: identifier.to_string(),
    })
}

/// Whether `c` may appear in a placeholder identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn is_directive(directive: &str) -> bool {
    directive.is_empty()
        || directive.eq_ignore_ascii_case(":pre")
        || directive.eq_ignore_ascii_case(":post")
}
