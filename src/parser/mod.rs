//! Header scanner — walks one file's content and extracts all records.

pub mod header;

use crate::model::Record;

/// Extract every documented function from a file's full text content.
///
/// The scanner resumes at the index reported by the parser rather than the
/// next line, so block content is never re-scanned and back-to-back headers
/// each produce one record. Blocks with an empty name are discarded.
pub fn scan(content: &str, source_file: &str) -> Vec<Record> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if header::is_block_start(lines[i].trim_end()) {
            let (record, next) = header::parse_block(&lines, i, source_file);
            if !record.name.is_empty() {
                records.push(record);
            }
            i = next;
        } else {
            i += 1;
        }
    }

    records
}
