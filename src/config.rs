//! Runtime configuration for the index pipeline and query engine.

use std::path::PathBuf;

/// Field separator used within a raw-store record.
pub const FIELD_SEP: u8 = 0x03;

/// Record separator used between raw-store records.
pub const RECORD_SEP: u8 = b'\n';

/// Tunables for the offline build and the online query engine.
///
/// Populated from CLI flags (see [`crate::cli`]); there is no runtime
/// reconfiguration once a [`crate::search::SearchIndex`] has been built from a
/// given `Config`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the HTML source tree walked by the extractor.
    pub source_root_path: PathBuf,
    /// Prefix prepended to the path-after-root to form a document's public URL.
    pub url_prefix: String,
    /// Path to the flat raw-store file.
    pub raw_file_path: PathBuf,
    /// Per-occurrence weight for a term found in a document's title.
    pub title_weight: u32,
    /// Per-occurrence weight for a term found in a document's body.
    pub body_weight: u32,
    /// Bytes of context kept before the matched keyword in a snippet.
    pub snippet_prev: usize,
    /// Bytes of context kept after the matched keyword in a snippet.
    pub snippet_after: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root_path: PathBuf::from("data/source/html"),
            url_prefix: String::new(),
            raw_file_path: PathBuf::from("data/raw"),
            title_weight: 10,
            body_weight: 1,
            snippet_prev: 50,
            snippet_after: 100,
        }
    }
}
