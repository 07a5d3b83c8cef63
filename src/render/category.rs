//! Category page renderer.
//!
//! One page per non-empty category: title, description, then every record
//! as a structured block. Pages carry no timestamps so re-running on
//! unchanged input produces byte-identical files.

use crate::model::{Category, Record};
use crate::render::basename;

/// Render a full category page. `records` must already be sorted by name.
pub fn render(category: Category, records: &[Record]) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", category.title()));
    out.push_str(&format!("{}\n\n", category.description()));
    out.push_str("---\n\n");

    for record in records {
        out.push_str(&render_record(record));
    }

    out
}

/// Render one record as a markdown block with an attr-list anchor, so the
/// function index can link to `<label>.md#<name>` directly.
pub fn render_record(record: &Record) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "### `{}` {{: #{} }}\n\n",
        record.name, record.name
    ));

    if !record.purpose.is_empty() {
        out.push_str(&record.purpose);
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "**Source:** `{}`\n\n",
        basename(&record.source_file)
    ));

    if !record.arguments.is_empty() {
        out.push_str("**Arguments:**\n\n");
        for arg in &record.arguments {
            out.push_str(&format!("- {arg}\n"));
        }
        out.push('\n');
    }

    if !record.returns.is_empty() {
        out.push_str(&format!("**Returns:** {}\n\n", record.returns));
    }

    if !record.output.is_empty() {
        out.push_str(&format!("**Output:** {}\n\n", record.output));
    }

    if !record.notes.is_empty() {
        out.push_str("!!! info \"Notes\"\n");
        for line in record.notes.split('\n') {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("    {line}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out
}
