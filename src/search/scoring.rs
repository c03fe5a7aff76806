//! Keyword-centered snippet extraction.
//!
//! The weighted term-frequency formula lives in [`super::index::build_index`];
//! this module covers the other scoring-adjacent piece of the query path:
//! cutting a readable excerpt out of a matched document's body.

/// Sentinel returned when `keyword` cannot be found in `body` at all.
pub const KEYWORD_NOT_FOUND: &str = "Fail to cut body, can't find keyword";

/// Sentinel returned when a match was found but the computed window is empty.
pub const BODY_NOT_ENOUGH: &str = "Fail to cut body, body is not enough";

/// Extracts a window of `body` centered on the first case-insensitive match of
/// `keyword`, `prev` bytes before the match and `keyword.len() + after` bytes
/// after it.
///
/// Returns one of the sentinel strings above if the keyword isn't present, or
/// if the resulting window is empty. The window is widened outward to the
/// nearest `char` boundary so this never panics on multi-byte UTF-8 bodies,
/// even though the corpus this crate targets is ASCII-dominant.
pub fn extract_snippet(body: &str, keyword: &str, prev: usize, after: usize) -> String {
    let Some(pos) = find_case_insensitive(body, keyword) else {
        return KEYWORD_NOT_FOUND.to_string();
    };

    let start = pos.saturating_sub(prev);
    let end = (pos + keyword.len() + after).min(body.len().saturating_sub(1));

    if body.is_empty() || start > end {
        return BODY_NOT_ENOUGH.to_string();
    }

    let start = floor_char_boundary(body, start);
    let end_exclusive = ceil_char_boundary(body, end + 1);

    body[start..end_exclusive].to_string()
}

/// Byte offset of the first case-insensitive match of `needle` in `haystack`,
/// or `None` if absent.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let haystack_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();
    haystack_lower.find(&needle_lower)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn returns_whole_body_when_shorter_than_window() {
        let body = "boost library example";
        check!(extract_snippet(body, "boost", 50, 100) == body);
    }

    #[test]
    fn sentinel_when_keyword_absent() {
        check!(extract_snippet("no match here", "zzzzz", 50, 100) == KEYWORD_NOT_FOUND);
    }

    #[test]
    fn case_insensitive_match() {
        let body = "Boost Library";
        check!(extract_snippet(body, "boost", 50, 100) == body);
    }

    #[test]
    fn windows_around_a_distant_match() {
        let prefix = "x".repeat(450);
        let suffix = "y".repeat(200);
        let body = format!("{prefix}keyword{suffix}");

        let snippet = extract_snippet(&body, "keyword", 50, 100);
        // inclusive range [pos-50, pos+7+100] = 50 + 7 + 100 + 1 = 158 bytes
        check!(snippet.len() == 158);
        check!(snippet.starts_with(&"x".repeat(50)));
        check!(snippet.contains("keyword"));
    }

    #[test]
    fn sentinel_when_body_empty() {
        check!(extract_snippet("", "keyword", 50, 100) == KEYWORD_NOT_FOUND);
    }
}
