//! End-to-end coverage of the offline pipeline (extract -> raw store -> build)
//! feeding the online query path, mirroring the boundary scenarios in the
//! crate's design notes.

use assert2::check;
use docsearch::config::Config;
use docsearch::search::{build_index, AsciiWhitespaceTokenizer, SearchHit, SearchIndex};
use docsearch::{extract, raw};
use tempfile::TempDir;

fn write_html(dir: &TempDir, relative: &str, title: &str, body: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, format!("<html><head><title>{title}</title></head><body>{body}</body></html>")).unwrap();
}

fn hits_for(json: &str) -> Vec<SearchHit> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_pipeline_extracts_stores_builds_and_answers_queries() {
    let source = TempDir::new().unwrap();
    write_html(&source, "h.html", "Hello", "boost library example");

    let docs = extract::extract_all(source.path(), "https://example");
    check!(docs.len() == 1);

    let raw_dir = TempDir::new().unwrap();
    let raw_path = raw_dir.path().join("raw");
    raw::write(&raw_path, &docs).unwrap();

    let read_back = raw::read(&raw_path);
    check!(read_back == docs);

    let config = Config::default();
    let built = build_index(read_back, &AsciiWhitespaceTokenizer, &config);
    let index = SearchIndex::new(built, Box::new(AsciiWhitespaceTokenizer), config);

    let hits = hits_for(&index.search("boost"));
    check!(hits.len() == 1);
    check!(hits[0].title == "Hello");
    check!(hits[0].body == "boost library example");
    check!(hits[0].url.ends_with("h.html"));
}

#[test]
fn unmatched_term_yields_empty_array_end_to_end() {
    let source = TempDir::new().unwrap();
    write_html(&source, "h.html", "Hello", "boost library example");
    let docs = extract::extract_all(source.path(), "https://example");

    let config = Config::default();
    let built = build_index(docs, &AsciiWhitespaceTokenizer, &config);
    let index = SearchIndex::new(built, Box::new(AsciiWhitespaceTokenizer), config);

    check!(index.search("zzzzz") == "[]");
}

#[test]
fn missing_source_tree_round_trips_to_empty_results() {
    let config = Config::default();
    let docs = extract::extract_all(std::path::Path::new("/does/not/exist"), "https://example");
    check!(docs.is_empty());

    let built = build_index(docs, &AsciiWhitespaceTokenizer, &config);
    let index = SearchIndex::new(built, Box::new(AsciiWhitespaceTokenizer), config);
    check!(index.search("anything") == "[]");
}

#[test]
fn weighted_ranking_favors_title_matches_across_the_full_pipeline() {
    let source = TempDir::new().unwrap();
    write_html(&source, "title.html", "alpha", "");
    write_html(&source, "body.html", "", "alpha alpha alpha");

    let docs = extract::extract_all(source.path(), "https://example");
    let config = Config::default();
    let built = build_index(docs, &AsciiWhitespaceTokenizer, &config);
    let index = SearchIndex::new(built, Box::new(AsciiWhitespaceTokenizer), config);

    let hits = hits_for(&index.search("alpha"));
    check!(hits.len() == 2);
    check!(hits[0].url.ends_with("title.html"));
    check!(hits[1].url.ends_with("body.html"));
}
