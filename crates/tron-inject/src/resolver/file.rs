//! File lookup for file placeholders.
//!
//! Two lookup modes:
//! - **exact** — `directory/identifier` must be a regular file.
//! - **stem** — the first directory entry matching `identifier.*`, in the
//!   order the filesystem yields entries (not sorted), must be a regular file.
//!
//! Contents are decoded as UTF-8 (lossy) and trimmed. With caching enabled,
//! the cache is consulted only after a path has been found, and is keyed by
//! identifier rather than path.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use tracing::{debug, warn};

use super::ResolutionStats;
use super::cache::ResolutionCache;

/// Resolves file identifiers against one injection directory.
#[derive(Debug)]
pub struct FileResolver {
    directory: PathBuf,
    exact_match: bool,
    cache: Option<ResolutionCache>,
    stats: ResolutionStats,
}

impl FileResolver {
    /// Create a resolver for `directory`.
    pub fn new(directory: impl Into<PathBuf>, exact_match: bool, cache_enabled: bool) -> Self {
        Self {
            directory: directory.into(),
            exact_match,
            cache: cache_enabled.then(ResolutionCache::new),
            stats: ResolutionStats::default(),
        }
    }

    /// Trimmed contents of the file named by `identifier`, or `None` if no
    /// such file exists or it cannot be read.
    pub fn resolve(&mut self, identifier: &str) -> Option<String> {
        let Some(path) = self.locate(identifier) else {
            debug!(identifier, directory = %self.directory.display(), "no file for placeholder");
            self.stats.missing_files += 1;
            return None;
        };

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(identifier)) {
            self.stats.cache_hits += 1;
            return Some(cached.to_string());
        }

        match read_trimmed(&path) {
            Ok(contents) => {
                self.stats.file_reads += 1;
                if let Some(cache) = self.cache.as_mut() {
                    cache.insert(identifier, contents.clone());
                }
                Some(contents)
            }
            Err(error) => {
                warn!(identifier, path = %path.display(), %error, "failed to read injection file");
                self.stats.missing_files += 1;
                None
            }
        }
    }

    /// Path backing `identifier`, if it names a regular file.
    pub fn locate(&self, identifier: &str) -> Option<PathBuf> {
        let path = if self.exact_match {
            self.directory.join(identifier)
        } else {
            self.first_stem_match(identifier)?
        };
        path.is_file().then_some(path)
    }

    /// Injection directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Resolution counters so far.
    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }

    /// Number of cached identifiers (zero when caching is disabled).
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, ResolutionCache::len)
    }

    fn first_stem_match(&self, identifier: &str) -> Option<PathBuf> {
        let matcher = match GlobBuilder::new(&format!("{identifier}.*"))
            .literal_separator(true)
            .build()
        {
            Ok(glob) => glob.compile_matcher(),
            Err(error) => {
                warn!(identifier, %error, "invalid injection glob");
                return None;
            }
        };

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(error) => {
                debug!(directory = %self.directory.display(), %error, "cannot list injection directory");
                return None;
            }
        };

        entries
            .filter_map(Result::ok)
            .find(|entry| matcher.is_match(entry.file_name()))
            .map(|entry| entry.path())
    }
}

/// Read a file as text and strip surrounding whitespace (including a BOM).
fn read_trimmed(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    // --- exact mode ---

    #[test]
    fn exact_reads_full_filename() {
        let dir = dir_with(&[("header.html", "  <h1>Hi</h1>\n")]);
        let mut resolver = FileResolver::new(dir.path(), true, false);
        assert_eq!(resolver.resolve("header.html").as_deref(), Some("<h1>Hi</h1>"));
    }

    #[test]
    fn exact_requires_extension() {
        let dir = dir_with(&[("header.html", "<h1>Hi</h1>")]);
        let mut resolver = FileResolver::new(dir.path(), true, false);
        assert_eq!(resolver.resolve("header"), None);
        assert_eq!(resolver.stats().missing_files, 1);
    }

    #[test]
    fn exact_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        let mut resolver = FileResolver::new(dir.path(), true, false);
        assert_eq!(resolver.resolve("partials"), None);
    }

    // --- stem mode ---

    #[test]
    fn stem_matches_any_extension() {
        let dir = dir_with(&[("greeting.txt", "Hello\n")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("greeting").as_deref(), Some("Hello"));
    }

    #[test]
    fn stem_requires_an_extension_separator() {
        let dir = dir_with(&[("greeting", "Hello"), ("greetings.txt", "Hi all")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("greeting"), None);
    }

    #[test]
    fn stem_match_with_dotted_identifier() {
        let dir = dir_with(&[("nav.main.html", "<nav/>")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("nav.main").as_deref(), Some("<nav/>"));
    }

    #[test]
    fn stem_picks_one_of_several_candidates() {
        let dir = dir_with(&[("footer.html", "html"), ("footer.txt", "txt")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        let resolved = resolver.resolve("footer").unwrap();
        assert!(resolved == "html" || resolved == "txt");
    }

    #[test]
    fn stem_match_on_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("footer.d")).unwrap();
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("footer"), None);
    }

    #[test]
    fn missing_directory_is_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut resolver = FileResolver::new(dir.path().join("nope"), false, true);
        assert_eq!(resolver.resolve("anything"), None);
        assert_eq!(resolver.stats().missing_files, 1);
    }

    // --- contents ---

    #[test]
    fn trims_whitespace_and_bom() {
        let dir = dir_with(&[("a.txt", "\u{feff}\n\t body \r\n")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("a").as_deref(), Some("body"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bin.dat"), [b'o', b'k', 0xff]).unwrap();
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("bin").as_deref(), Some("ok\u{fffd}"));
    }

    // --- cache ---

    #[test]
    fn cache_serves_repeat_lookups() {
        let dir = dir_with(&[("greeting.txt", "Hello")]);
        let mut resolver = FileResolver::new(dir.path(), false, true);
        assert_eq!(resolver.resolve("greeting").as_deref(), Some("Hello"));

        fs::write(dir.path().join("greeting.txt"), "Changed").unwrap();
        assert_eq!(resolver.resolve("greeting").as_deref(), Some("Hello"));

        let stats = resolver.stats();
        assert_eq!(stats.file_reads, 1);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(resolver.cached_len(), 1);
    }

    #[test]
    fn cache_is_checked_after_lookup() {
        let dir = dir_with(&[("greeting.txt", "Hello")]);
        let mut resolver = FileResolver::new(dir.path(), false, true);
        assert!(resolver.resolve("greeting").is_some());

        fs::remove_file(dir.path().join("greeting.txt")).unwrap();
        assert_eq!(resolver.resolve("greeting"), None);
    }

    #[test]
    fn cache_disabled_rereads() {
        let dir = dir_with(&[("greeting.txt", "Hello")]);
        let mut resolver = FileResolver::new(dir.path(), false, false);
        assert_eq!(resolver.resolve("greeting").as_deref(), Some("Hello"));

        fs::write(dir.path().join("greeting.txt"), "Changed").unwrap();
        assert_eq!(resolver.resolve("greeting").as_deref(), Some("Changed"));
        assert_eq!(resolver.stats().file_reads, 2);
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn empty_file_is_cached_as_present() {
        let dir = dir_with(&[("blank.txt", "   \n")]);
        let mut resolver = FileResolver::new(dir.path(), false, true);
        assert_eq!(resolver.resolve("blank").as_deref(), Some(""));
        assert_eq!(resolver.resolve("blank").as_deref(), Some(""));
        assert_eq!(resolver.stats().file_reads, 1);
    }
}
