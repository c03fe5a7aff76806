//! Tokenisation, indexing, and query resolution for the offline/online search core.

mod index;
mod query;
mod scoring;
mod tokenize;

pub use index::{build_index, BuiltIndex, Doc, DocId, ForwardIndex, InvertedIndex, PostingEntry};
pub use query::{SearchHit, SearchIndex};
pub use scoring::{extract_snippet, BODY_NOT_ENOUGH, KEYWORD_NOT_FOUND};
pub use tokenize::{lowercase_tokens, AsciiWhitespaceTokenizer, JiebaTokenizer, Tokenizer};
