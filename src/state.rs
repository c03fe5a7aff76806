//! One-shot index initialisation.
//!
//! Replaces the source engine's manually-guarded singleton (a double-checked
//! null pointer behind a mutex) with `std::sync::OnceLock`: the index is built
//! at most once, lazily, on first access, and the resulting `Arc<SearchIndex>`
//! is cheap to clone and share across threads for the rest of the process.

use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::search::{build_index, JiebaTokenizer, SearchIndex};

static INDEX: OnceLock<Arc<SearchIndex>> = OnceLock::new();

/// Returns the process-wide search index, building it from `config` on first
/// call. Subsequent calls return the already-built index regardless of
/// `config` (the first caller's configuration wins); callers that need a
/// fresh index with different settings should construct a [`SearchIndex`]
/// directly instead of going through this cell.
pub fn index(config: &Config) -> Arc<SearchIndex> {
    Arc::clone(INDEX.get_or_init(|| Arc::new(build(config))))
}

fn build(config: &Config) -> SearchIndex {
    let docs = crate::raw::read(&config.raw_file_path);
    tracing::info!(documents = docs.len(), "building search index");

    let tokenizer = JiebaTokenizer::new();
    let built = build_index(docs, &tokenizer, config);

    tracing::info!(
        terms = built.inverted.term_count(),
        documents = built.forward.len(),
        "search index built"
    );

    SearchIndex::new(built, Box::new(tokenizer), config.clone())
}
