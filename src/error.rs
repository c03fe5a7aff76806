//! Centralized error handling with typed error enums.
//!
//! Most failure modes in this crate are *not* fatal: a single bad HTML file or a
//! malformed raw-store line is logged and skipped so the rest of the corpus still
//! gets indexed. The enums below exist for the handful of operations that the CLI
//! treats as hard failures (opening/writing the raw file), plus a top-level
//! `IndexError` that wraps whichever stage actually failed.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for docsearch operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can abort the offline build or the raw-store round trip.
///
/// `search()` itself never returns one of these: a query against an empty or
/// partially-built index just yields fewer results, per the total-function
/// contract described in the crate's design notes.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The raw store could not be opened for reading or writing.
    #[error("raw store I/O failure at {path}: {source}")]
    RawStoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub(crate) fn raw_store_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RawStoreIo {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn raw_store_io_message_names_the_path() {
        let err = IndexError::raw_store_io(
            "data/raw",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        check!(err.to_string().contains("data/raw"));
    }
}
