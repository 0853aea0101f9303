//! Substitution over one document.
//!
//! For each placeholder of the configured scope, in document order, the
//! engine parses the token, resolves it against the file or variable
//! resolver, and splices the result in verbatim. Unresolved placeholders are
//! removed. Inserted text is never re-scanned.

use tracing::debug;

use crate::config::InjectConfig;
use crate::pattern::find_placeholders;
use crate::resolver::{FileResolver, ResolutionStats, VariableResolver};
use crate::token::parse_token;
use crate::types::TokenKind;

/// Placeholder substitution engine.
///
/// The only state carried between [`process`](Self::process) calls is the
/// file cache. An engine is owned by one pipeline stage; wrap it in a lock
/// before sharing it across threads.
#[derive(Debug)]
pub struct InjectionEngine {
    config: InjectConfig,
    files: FileResolver,
    missing_variables: u64,
}

impl InjectionEngine {
    /// Create an engine with its own empty cache.
    pub fn new(config: InjectConfig) -> Self {
        let files = FileResolver::new(
            config.directory(),
            config.exact_match(),
            config.cache_enabled(),
        );
        Self {
            config,
            files,
            missing_variables: 0,
        }
    }

    /// Replace every placeholder in `document`, returning a new string.
    pub fn process(&mut self, document: &str) -> String {
        let variables = VariableResolver::new(self.config.replacements());
        let mut result = String::with_capacity(document.len());
        let mut cursor = 0;
        let mut placeholders = 0usize;

        for raw in find_placeholders(document, self.config.scope()) {
            result.push_str(&document[cursor..raw.start]);
            cursor = raw.end;
            placeholders += 1;

            let Some(token) = parse_token(raw.text) else {
                continue;
            };

            match token.kind {
                TokenKind::File => {
                    if let Some(contents) = self.files.resolve(&token.identifier) {
                        result.push_str(&contents);
                    }
                }
                TokenKind::Variable => match variables.resolve(&token.identifier) {
                    Some(value) => result.push_str(value),
                    None => {
                        debug!(identifier = %token.identifier, "no replacement for variable");
                        self.missing_variables += 1;
                    }
                },
            }
        }

        if placeholders == 0 {
            return document.to_string();
        }

        result.push_str(&document[cursor..]);
        debug!(placeholders, scope = %self.config.scope(), "document processed");
        result
    }

    /// Configuration this engine was built with.
    pub fn config(&self) -> &InjectConfig {
        &self.config
    }

    /// Resolution counters accumulated over this engine's lifetime.
    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats {
            missing_variables: self.missing_variables,
            ..self.files.stats()
        }
    }
}
