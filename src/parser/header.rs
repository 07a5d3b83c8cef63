//! Function header parser — explicit state machine over one comment block.
//!
//! A header block is a run of comment lines of the form:
//!
//! ```text
//! # Function: dba_log
//! # Purpose.: Unified logging with configurable levels
//! # Args....: $1 - log level
//! #           $2 - message text
//! # Returns.: 0 on success
//! # Output..: Formatted log line on stdout
//! # Notes...: Levels are DEBUG, INFO, WARN, ERROR.
//! # ------------------------------------------------------------------
//! ```
//!
//! Transition rules are evaluated in fixed priority order against each
//! consumed line; the first match wins. Field detection is driven by a
//! grammar table so the matcher patterns stay separate from control flow.

use crate::model::Record;
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# Function:(.*)$").unwrap());

// Separator of repeated dashes closes the block.
static RE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# -{6}").unwrap());

// Comment marker followed by a run of at least ten spaces continues the
// previous Args or Notes field.
static RE_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# {10} *(.*)$").unwrap());

/// Sub-mode of an open header: the last recognized field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Purpose,
    Args,
    Returns,
    Output,
    Notes,
}

struct FieldRule {
    key: FieldKey,
    matcher: Regex,
}

// The fixed-width dotted prefixes of the header grammar. Each pattern
// captures the trailing text after the colon.
static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    [
        (FieldKey::Purpose, r"^# Purpose\.:(.*)$"),
        (FieldKey::Args, r"^# Args\.{4}:(.*)$"),
        (FieldKey::Returns, r"^# Returns\.:(.*)$"),
        (FieldKey::Output, r"^# Output\.{2}:(.*)$"),
        (FieldKey::Notes, r"^# Notes\.{3}:(.*)$"),
    ]
    .into_iter()
    .map(|(key, pattern)| FieldRule {
        key,
        matcher: Regex::new(pattern).unwrap(),
    })
    .collect()
});

/// Whether a line opens a header block.
pub fn is_block_start(line: &str) -> bool {
    RE_FUNCTION.is_match(line)
}

/// Match a line against the field grammar table.
/// Returns the field key and the trimmed trailing text.
fn match_field(line: &str) -> Option<(FieldKey, String)> {
    for rule in FIELD_RULES.iter() {
        if let Some(caps) = rule.matcher.captures(line) {
            return Some((rule.key, caps[1].trim().to_string()));
        }
    }
    None
}

/// Parse one header block starting at `start` (which must be a block-start
/// line). Returns the record plus the index the scanner should resume at.
///
/// The resume index is the line after the terminator, or the index of the
/// line that ended the block without being part of it (a new `Function:`
/// line or a non-comment line), so the scanner never re-reads block
/// content and never skips a back-to-back header.
pub fn parse_block(lines: &[&str], start: usize, source_file: &str) -> (Record, usize) {
    let first = lines[start].trim_end();
    let name = RE_FUNCTION
        .captures(first)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let mut record = Record {
        name,
        source_file: source_file.to_string(),
        ..Record::default()
    };
    let mut sub_mode: Option<FieldKey> = None;

    let mut i = start + 1;
    while i < lines.len() {
        let line = lines[i].trim_end();

        // A new Function line ends the open block; it is not consumed so
        // the scanner starts the next block exactly there.
        if RE_FUNCTION.is_match(line) {
            return (record, i);
        }

        if let Some((key, text)) = match_field(line) {
            match key {
                FieldKey::Purpose => record.purpose = text,
                FieldKey::Args => {
                    if !text.is_empty() {
                        record.arguments.push(text);
                    }
                }
                FieldKey::Returns => record.returns = text,
                FieldKey::Output => record.output = text,
                FieldKey::Notes => record.notes = text,
            }
            sub_mode = Some(key);
            i += 1;
            continue;
        }

        if RE_TERMINATOR.is_match(line) {
            return (record, i + 1);
        }

        if let Some(caps) = RE_CONTINUATION.captures(line) {
            let text = caps[1].trim();
            if !text.is_empty() {
                match sub_mode {
                    Some(FieldKey::Args) => record.arguments.push(text.to_string()),
                    Some(FieldKey::Notes) => concat_line(&mut record.notes, text),
                    _ => {}
                }
            }
            i += 1;
            continue;
        }

        // Unexpected end of header: a line outside the comment grammar
        // closes the block without being consumed.
        if !line.starts_with('#') {
            return (record, i);
        }

        // Any other comment line inside the block is ignored.
        i += 1;
    }

    (record, lines.len())
}

/// Append a line to accumulated notes, newline-joined.
fn concat_line(dest: &mut String, text: &str) {
    if dest.is_empty() {
        *dest = text.to_string();
    } else {
        dest.push('\n');
        dest.push_str(text);
    }
}
