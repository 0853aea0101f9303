//! Placeholder resolution.
//!
//! - [`file`] — locate, read and trim files from the injection directory
//! - [`variable`] — look up variables in the replacement map
//! - [`cache`] — per-resolver cache of trimmed file contents

pub mod cache;
pub mod file;
pub mod variable;

pub use cache::ResolutionCache;
pub use file::FileResolver;
pub use variable::VariableResolver;

/// Counters describing how placeholders were resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Files read from disk.
    pub file_reads: u64,
    /// File placeholders served from the cache.
    pub cache_hits: u64,
    /// File placeholders with no backing file.
    pub missing_files: u64,
    /// Variable placeholders with no replacement.
    pub missing_variables: u64,
}
