//! Query resolution: tokenise, merge posting lists, rank, snippet, serialise.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::index::{BuiltIndex, DocId, ForwardIndex, InvertedIndex};
use super::scoring::extract_snippet;
use super::tokenize::{lowercase_tokens, Tokenizer};
use crate::config::Config;

/// Transient per-query record: one per distinct matched document.
#[derive(Debug, Clone)]
struct QueryHit {
    doc_id: DocId,
    words_matched: Vec<String>,
    accumulated_weight: u32,
}

/// The externally visible shape of a single search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub body: String,
    pub url: String,
}

/// An immutable, built search index: forward + inverted data plus the shared
/// tokenizer and tunables needed to answer queries.
///
/// Constructed once (see [`crate::state`]) and then read-only for the process
/// lifetime, so concurrent calls to [`SearchIndex::search`] require no
/// synchronization beyond whatever the tokenizer itself needs (none, for
/// `jieba-rs`'s `Jieba`).
pub struct SearchIndex {
    forward: ForwardIndex,
    inverted: InvertedIndex,
    tokenizer: Box<dyn Tokenizer>,
    config: Config,
}

impl SearchIndex {
    /// Assembles a `SearchIndex` from an already-built forward/inverted pair.
    pub fn new(built: BuiltIndex, tokenizer: Box<dyn Tokenizer>, config: Config) -> Self {
        Self {
            forward: built.forward,
            inverted: built.inverted,
            tokenizer,
            config,
        }
    }

    pub fn document_count(&self) -> usize {
        self.forward.len()
    }

    pub fn term_count(&self) -> usize {
        self.inverted.term_count()
    }

    /// Answers a query, returning a JSON array string. Never panics, never
    /// returns an error: an empty or unmatched query simply yields `"[]"`.
    pub fn search(&self, query: &str) -> String {
        let hits = self.resolve(query);
        let results: Vec<SearchHit> = hits.into_iter().map(|hit| self.to_search_hit(&hit)).collect();
        serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Same merge semantics as [`SearchIndex::search`] but returns the
    /// structured hits before snippet extraction and JSON encoding, for tests
    /// that want to assert on ordering and weights directly.
    fn resolve(&self, query: &str) -> Vec<QueryHit> {
        let tokens = lowercase_tokens(self.tokenizer.cut_for_search(query));

        let mut acc: HashMap<DocId, QueryHit> = HashMap::new();
        let mut order: Vec<DocId> = Vec::new();

        for term in &tokens {
            for posting in self.inverted.postings(term) {
                if acc.contains_key(&posting.doc_id) {
                    merge_repeat_match(&mut acc, posting);
                } else {
                    acc.insert(
                        posting.doc_id,
                        QueryHit {
                            doc_id: posting.doc_id,
                            words_matched: vec![posting.term.clone()],
                            accumulated_weight: posting.weight,
                        },
                    );
                    order.push(posting.doc_id);
                }
            }
        }

        let mut results: Vec<QueryHit> = order.into_iter().map(|id| acc.remove(&id).unwrap()).collect();
        results.sort_by(|a, b| b.accumulated_weight.cmp(&a.accumulated_weight));
        results
    }

    fn to_search_hit(&self, hit: &QueryHit) -> SearchHit {
        let Some(doc) = self.forward.get(hit.doc_id) else {
            return SearchHit {
                title: String::new(),
                body: String::new(),
                url: String::new(),
            };
        };

        let keyword = hit.words_matched.first().map(String::as_str).unwrap_or_default();
        let snippet = extract_snippet(&doc.body, keyword, self.config.snippet_prev, self.config.snippet_after);

        SearchHit {
            title: doc.title.clone(),
            body: snippet,
            url: doc.url.clone(),
        }
    }
}

/// Applies the repeat-match policy for a document already present in `acc`.
///
/// By default this is a no-op: a document matching multiple query tokens does
/// not accumulate additional weight beyond its first matched token, preserving
/// the source engine's behaviour bit-for-bit (see the crate's design notes).
/// With the `accumulate-weights` feature enabled, the entry instead gains the
/// new term and has the new posting's weight added.
#[cfg(not(feature = "accumulate-weights"))]
fn merge_repeat_match(_acc: &mut HashMap<DocId, QueryHit>, _posting: &super::index::PostingEntry) {}

#[cfg(feature = "accumulate-weights")]
fn merge_repeat_match(acc: &mut HashMap<DocId, QueryHit>, posting: &super::index::PostingEntry) {
    if let Some(hit) = acc.get_mut(&posting.doc_id) {
        hit.words_matched.push(posting.term.clone());
        hit.accumulated_weight += posting.weight;
    }
}
