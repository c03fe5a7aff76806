//! Forward and inverted index construction and the core document data model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenize::{lowercase_tokens, Tokenizer};
use crate::config::Config;

/// Dense, zero-based document identifier assigned in raw-store read order.
pub type DocId = u32;

/// A processed HTML page, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub title: String,
    pub body: String,
    pub url: String,
}

/// One entry in a term's posting list: how strongly `term` matches `doc_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingEntry {
    pub doc_id: DocId,
    pub term: String,
    pub weight: u32,
}

/// Dense `DocId -> Doc` mapping built in raw-store read order.
#[derive(Debug, Default)]
pub struct ForwardIndex {
    docs: Vec<Doc>,
}

impl ForwardIndex {
    fn push(&mut self, doc: Doc) -> DocId {
        let id = self.docs.len() as DocId;
        self.docs.push(doc);
        id
    }

    /// Looks up a document by id. `None` if `doc_id` is out of range.
    pub fn get(&self, doc_id: DocId) -> Option<&Doc> {
        self.docs.get(doc_id as usize)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// `term -> postings` mapping enabling term-to-doc lookup.
///
/// Each term's posting list is sorted ascending by `doc_id` and contains at
/// most one entry per `doc_id`, both invariants that fall out of the build
/// algorithm (see [`build_index`]) rather than needing an explicit sort pass.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<PostingEntry>>,
}

impl InvertedIndex {
    /// Returns the posting list for `term`, or an empty slice if the term was
    /// never indexed.
    pub fn postings(&self, term: &str) -> &[PostingEntry] {
        self.postings.get(term).map_or(&[], Vec::as_slice)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

/// A built, immutable (forward index, inverted index) pair.
#[derive(Debug, Default)]
pub struct BuiltIndex {
    pub forward: ForwardIndex,
    pub inverted: InvertedIndex,
}

/// Per-document term frequency accumulator, discarded once that document's
/// postings have been emitted.
#[derive(Default, Clone, Copy)]
struct WordCount {
    title_hits: u32,
    body_hits: u32,
}

/// Builds a forward + inverted index from an ordered sequence of documents.
///
/// Documents are consumed in order; the `i`-th document becomes `DocId(i)`.
/// Within each document, term weights are `title_hits * title_weight +
/// body_hits * body_weight`. Terms are emitted into the inverted index in
/// sorted order so that two builds of the same input produce a byte-identical
/// index, independent of hash-map iteration order.
pub fn build_index(docs: Vec<Doc>, tokenizer: &dyn Tokenizer, config: &Config) -> BuiltIndex {
    let mut forward = ForwardIndex::default();
    let mut inverted = InvertedIndex::default();

    for doc in docs {
        let mut word_counts: HashMap<String, WordCount> = HashMap::new();

        for term in lowercase_tokens(tokenizer.cut_for_search(&doc.title)) {
            word_counts.entry(term).or_default().title_hits += 1;
        }
        for term in lowercase_tokens(tokenizer.cut_for_search(&doc.body)) {
            word_counts.entry(term).or_default().body_hits += 1;
        }

        let doc_id = forward.push(doc);

        let mut terms: Vec<_> = word_counts.into_iter().collect();
        terms.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (term, counts) in terms {
            let weight = counts.title_hits * config.title_weight + counts.body_hits * config.body_weight;
            inverted
                .postings
                .entry(term.clone())
                .or_default()
                .push(PostingEntry { doc_id, term, weight });
        }
    }

    BuiltIndex { forward, inverted }
}
