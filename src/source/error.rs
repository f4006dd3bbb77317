// src/source/error.rs
// =============================================================================
// Why a source's content could not be obtained.
//
// These never stop the run. Each one is turned into the failure reason of
// that source's SourceResult and the other sources carry on.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported scheme '{0}': only http and https can be fetched")]
    UnsupportedScheme(String),

    #[error("Failed to retrieve content: source is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let err = SourceError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404 Not Found");

        let err = SourceError::UnsupportedScheme("ftp".to_string());
        assert!(err.to_string().contains("ftp"));
    }
}
