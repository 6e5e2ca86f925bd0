/// Artifact filename timestamp: "202608070905"
pub(crate) const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Results-store timestamp: "2026-08-07 09:05"
pub(crate) const DB_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Per-attempt timeout for tracker requests
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Attempt cap for one category before the run aborts
pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// First-retry delay; doubles on each subsequent retry
pub(crate) const DEFAULT_BACKOFF_MS: u64 = 500;

/// Where raw query results land when no directory is configured
pub(crate) const DEFAULT_JSON_DIR: &str = "bugdata";

/// Results-store file when no path is configured
pub(crate) const DEFAULT_DB_PATH: &str = "secstats.db";

/// Scratch subdirectory under the OS temp dir used by debug runs
pub(crate) const SCRATCH_DIR: &str = "secstats";
