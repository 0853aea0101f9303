//! Variable lookup against the replacement map.

use crate::types::ReplacementMap;

/// Read-only view of a [`ReplacementMap`].
///
/// An explicit empty string is a present value; only an absent key is
/// missing.
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    replacements: &'a ReplacementMap,
}

impl<'a> VariableResolver<'a> {
    /// Borrow a replacement map for lookups.
    pub fn new(replacements: &'a ReplacementMap) -> Self {
        Self { replacements }
    }

    /// Replacement text for a variable key (without its `$`).
    pub fn resolve(&self, identifier: &str) -> Option<&'a str> {
        self.replacements.get(identifier).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> ReplacementMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn present_key() {
        let replacements = map(&[("username", "Ada")]);
        let resolver = VariableResolver::new(&replacements);
        assert_eq!(resolver.resolve("username"), Some("Ada"));
    }

    #[test]
    fn absent_key() {
        let replacements = map(&[("username", "Ada")]);
        let resolver = VariableResolver::new(&replacements);
        assert_eq!(resolver.resolve("email"), None);
    }

    #[test]
    fn empty_value_is_present() {
        let replacements = map(&[("suffix", "")]);
        let resolver = VariableResolver::new(&replacements);
        assert_eq!(resolver.resolve("suffix"), Some(""));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let replacements = map(&[("Title", "Home")]);
        let resolver = VariableResolver::new(&replacements);
        assert_eq!(resolver.resolve("title"), None);
    }

    #[test]
    fn value_is_not_trimmed() {
        let replacements = map(&[("pad", "  x  ")]);
        let resolver = VariableResolver::new(&replacements);
        assert_eq!(resolver.resolve("pad"), Some("  x  "));
    }
}
