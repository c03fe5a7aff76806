//! Text tokenization shared identically between index build and query time.
//!
//! [`Tokenizer`] abstracts an external segmenter so the CJK-capable dictionary
//! dependency ([`jieba-rs`](https://docs.rs/jieba-rs)) can be swapped for a
//! trivial whitespace splitter in tests without touching the index or query
//! code.

use jieba_rs::Jieba;

/// A deterministic word segmenter used at both build time and query time.
///
/// Implementations MUST produce identical output for identical input, and MUST
/// produce tokens in left-to-right document order; the index builder and query
/// engine rely on both properties for correctness, not just performance.
pub trait Tokenizer: Send + Sync {
    /// Segments `input` into search tokens, in document order.
    fn cut_for_search(&self, input: &str) -> Vec<String>;
}

/// Production tokenizer backed by `jieba-rs`'s search-mode cut, which handles
/// mixed CJK/ASCII text and is safe to share across threads.
pub struct JiebaTokenizer {
    jieba: Jieba,
}

impl JiebaTokenizer {
    /// Builds a new tokenizer, loading jieba's default dictionary.
    ///
    /// This is the expensive part of the tokenizer: construction loads an
    /// internal dictionary, so callers should build one instance and share it
    /// (see [`crate::state`]) rather than constructing one per query.
    pub fn new() -> Self {
        Self { jieba: Jieba::new() }
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn cut_for_search(&self, input: &str) -> Vec<String> {
        self.jieba
            .cut_for_search(input, false)
            .into_iter()
            .map(str::to_string)
            .filter(|token| !token.trim().is_empty())
            .collect()
    }
}

/// A pure-ASCII whitespace tokenizer, for tests that don't need (or want) to
/// load jieba's dictionary.
///
/// Splits on Unicode whitespace and strips leading/trailing ASCII punctuation
/// from each piece, which is enough to exercise the index and query logic
/// without pulling in a dictionary-backed segmenter.
#[derive(Default)]
pub struct AsciiWhitespaceTokenizer;

impl Tokenizer for AsciiWhitespaceTokenizer {
    fn cut_for_search(&self, input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Lowercases a batch of tokens, the case-folding step applied identically
/// after every call to [`Tokenizer::cut_for_search`].
pub fn lowercase_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|token| token.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn ascii_tokenizer_splits_and_strips_punctuation() {
        let tokenizer = AsciiWhitespaceTokenizer;
        let tokens = tokenizer.cut_for_search("Boost library, example!");
        check!(tokens == vec!["Boost", "library", "example"]);
    }

    #[rstest]
    #[case("hello, world!", &["hello", "world"])]
    #[case("(parenthesized)", &["parenthesized"])]
    #[case("trailing...", &["trailing"])]
    #[case("\"quoted\"", &["quoted"])]
    #[case("no-punctuation-here", &["no-punctuation-here"])] // interior hyphens survive
    fn ascii_tokenizer_strips_leading_and_trailing_punctuation_only(#[case] input: &str, #[case] expected: &[&str]) {
        let tokenizer = AsciiWhitespaceTokenizer;
        check!(tokenizer.cut_for_search(input) == expected);
    }

    #[test]
    fn ascii_tokenizer_is_deterministic() {
        let tokenizer = AsciiWhitespaceTokenizer;
        let a = tokenizer.cut_for_search("alpha beta gamma");
        let b = tokenizer.cut_for_search("alpha beta gamma");
        check!(a == b);
    }

    #[test]
    fn lowercase_is_idempotent_under_prior_lowercasing() {
        let tokenizer = AsciiWhitespaceTokenizer;
        let direct = lowercase_tokens(tokenizer.cut_for_search("BOOST Library"));
        let pre_lowered = lowercase_tokens(tokenizer.cut_for_search("boost library"));
        check!(direct == pre_lowered);
    }

    #[test]
    fn jieba_tokenizer_handles_mixed_cjk_and_ascii() {
        let tokenizer = JiebaTokenizer::new();
        let tokens = tokenizer.cut_for_search("Rust 编程语言 tutorial");
        check!(!tokens.is_empty());
        check!(tokens.iter().any(|t| t.to_lowercase() == "rust"));
    }

    #[test]
    fn jieba_tokenizer_is_deterministic() {
        let tokenizer = JiebaTokenizer::new();
        let a = tokenizer.cut_for_search("搜索引擎 example");
        let b = tokenizer.cut_for_search("搜索引擎 example");
        check!(a == b);
    }
}
