use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request for {category} failed: {source}")]
    Http {
        category: &'static str,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Malformed response for {category}: {reason}")]
    Malformed {
        category: &'static str,
        reason: String,
    },

    #[error("Giving up on {category} after {attempts} attempts")]
    RetriesExhausted {
        category: &'static str,
        attempts: u32,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Results store error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl Error {
    /// Transient failures worth another attempt; everything else aborts the run.
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(self, Error::Http { .. } | Error::Malformed { .. })
    }
}
