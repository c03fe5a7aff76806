//! HTML source-tree extraction: walk a directory tree, parse each `.html` file
//! into a (title, body, url) triple.
//!
//! The body extractor is intentionally a simple two-state scanner rather than a
//! general HTML parser. It is correct for the uniform, generated documentation
//! this crate targets (no comments, no CDATA, no script/style blocks to skip)
//! and is kept simple on purpose; see the crate's design notes before reaching
//! for a real HTML parser here.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::{FIELD_SEP, RECORD_SEP};
use crate::search::Doc;

const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";

/// Walks `source_root` recursively and extracts every `.html` file into a [`Doc`].
///
/// Files that fail any extraction step are skipped with a logged warning; the
/// walk itself never fails. A missing or unreadable `source_root` simply yields
/// an empty result, also with a warning.
pub fn extract_all(source_root: &Path, url_prefix: &str) -> Vec<Doc> {
    if !source_root.exists() {
        tracing::warn!(path = %source_root.display(), "source root does not exist");
        return Vec::new();
    }

    let mut docs = Vec::new();

    for entry in WalkDir::new(source_root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "failed to walk directory entry");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }

        match extract_one(entry.path(), source_root, url_prefix) {
            Some(doc) => docs.push(doc),
            None => continue,
        }
    }

    docs
}

/// Extracts a single HTML file into a [`Doc`], or `None` with a logged warning
/// if any extraction step fails.
fn extract_one(path: &Path, source_root: &Path, url_prefix: &str) -> Option<Doc> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read HTML file");
            return None;
        }
    };

    let title = match title_from_html(&contents) {
        Some(title) => title,
        None => {
            tracing::warn!(path = %path.display(), "no <title> found, skipping");
            return None;
        }
    };

    let body = body_from_html(&contents);

    let url = match url_for_path(path, source_root, url_prefix) {
        Some(url) => url,
        None => {
            tracing::warn!(path = %path.display(), "could not construct URL, skipping");
            return None;
        }
    };

    if contains_reserved_byte(&title) || contains_reserved_byte(&body) || contains_reserved_byte(&url) {
        tracing::warn!(path = %path.display(), "document contains a reserved delimiter byte, skipping");
        return None;
    }

    Some(Doc { title, body, url })
}

fn contains_reserved_byte(s: &str) -> bool {
    s.bytes().any(|b| b == FIELD_SEP || b == RECORD_SEP)
}

/// Extracts the strict substring between the first `<title>` and the next
/// `</title>`. Case-sensitive; does not accept attributes on the tag.
fn title_from_html(contents: &str) -> Option<String> {
    let start = contents.find(TITLE_OPEN)?;
    let after_open = start + TITLE_OPEN.len();
    let end = contents[after_open..].find(TITLE_CLOSE)?;
    Some(contents[after_open..after_open + end].to_string())
}

/// Strips HTML tags with a two-state scanner, folding newlines to single spaces.
///
/// Starts in the `InTag` state, so any content before the first `>` is discarded.
fn body_from_html(contents: &str) -> String {
    enum State {
        InTag,
        InText,
    }

    let mut state = State::InTag;
    let mut body = String::with_capacity(contents.len());

    for c in contents.chars() {
        match state {
            State::InTag => {
                if c == '>' {
                    state = State::InText;
                }
            }
            State::InText => match c {
                '<' => state = State::InTag,
                '\n' => body.push(' '),
                other => body.push(other),
            },
        }
    }

    body
}

/// Builds the public URL by locating `source_root` within `path` and appending
/// the remaining suffix to `url_prefix`.
fn url_for_path(path: &Path, source_root: &Path, url_prefix: &str) -> Option<String> {
    let relative = path.strip_prefix(source_root).ok()?;
    let suffix = relative.to_str()?.replace(std::path::MAIN_SEPARATOR, "/");
    Some(format!("{url_prefix}/{suffix}"))
}
