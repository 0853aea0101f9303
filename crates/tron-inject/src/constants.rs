//! Shared constants for the injector.

/// Name reported by the pipeline adapter in fatal errors.
pub const ADAPTER_NAME: &str = "tron-inject";

/// Message reported when a streamed document reaches the adapter.
pub const STREAMING_NOT_SUPPORTED: &str = "Streaming not supported yet.";

/// Default location of injectable files (relative to the working directory).
pub const DEFAULT_DIRECTORY: &str = "html/injection/";

/// Env var overriding the injection directory.
pub const ENV_DIRECTORY: &str = "TRON_INJECT_DIRECTORY";

/// Env var overriding the directive scope.
pub const ENV_SCOPE: &str = "TRON_INJECT_SCOPE";

/// Env var overriding exact filename matching.
pub const ENV_EXACT: &str = "TRON_INJECT_EXACT";

/// Env var overriding file content caching.
pub const ENV_CACHE: &str = "TRON_INJECT_CACHE";
