//! Flat-file raw store: the sole persistence point for extracted documents.
//!
//! Fields within a record are separated by [`crate::config::FIELD_SEP`] (`0x03`);
//! records are separated by [`crate::config::RECORD_SEP`] (`\n`). Bodies are
//! guaranteed newline-free by the extractor, so the record separator is
//! unambiguous.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::config::FIELD_SEP;
use crate::error::{IndexError, Result};
use crate::search::Doc;

/// Writes `docs` to `path`, truncating any existing file.
///
/// A document whose title, body, or url contains a reserved delimiter byte is
/// rejected with a warning and omitted, rather than corrupting the file for
/// every record after it.
pub fn write(path: &Path, docs: &[Doc]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|err| IndexError::raw_store_io(path, err))?;
    let mut writer = std::io::BufWriter::new(file);

    for doc in docs {
        if contains_reserved_byte(&doc.title) || contains_reserved_byte(&doc.body) || contains_reserved_byte(&doc.url)
        {
            tracing::warn!(url = %doc.url, "document contains a reserved delimiter byte, not writing");
            continue;
        }

        writer
            .write_all(doc.title.as_bytes())
            .and_then(|()| writer.write_all(&[FIELD_SEP]))
            .and_then(|()| writer.write_all(doc.body.as_bytes()))
            .and_then(|()| writer.write_all(&[FIELD_SEP]))
            .and_then(|()| writer.write_all(doc.url.as_bytes()))
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|err| IndexError::raw_store_io(path, err))?;
    }

    writer.flush().map_err(|err| IndexError::raw_store_io(path, err))
}

fn contains_reserved_byte(s: &str) -> bool {
    s.bytes().any(|b| b == FIELD_SEP || b == b'\n')
}

/// Reads `path` line-by-line, producing one [`Doc`] per well-formed record.
///
/// Lines that don't split into exactly three fields on [`FIELD_SEP`] are
/// skipped with a warning. A missing file yields an empty, warning-logged
/// result rather than an error, matching the offline-pipeline error policy.
pub fn read(path: &Path) -> Vec<Doc> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "raw store not found, starting with empty index");
            return Vec::new();
        }
    };

    let reader = BufReader::new(file);
    let mut docs = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(lineno, error = %err, "failed to read raw store line, skipping");
                continue;
            }
        };

        let sep = FIELD_SEP as char;
        let parts: Vec<&str> = line.split(sep).collect();
        if parts.len() != 3 {
            tracing::warn!(lineno, fields = parts.len(), "malformed raw store record, skipping");
            continue;
        }

        docs.push(Doc {
            title: parts[0].to_string(),
            body: parts[1].to_string(),
            url: parts[2].to_string(),
        });
    }

    docs
}
