//! Alphabetical function index renderer.

use crate::model::DocModel;
use crate::render::record_link;

/// Render the function index: every (name, category) pair, sorted
/// case-insensitively by name, one link line per entry.
pub fn render(model: &DocModel) -> String {
    let mut entries: Vec<(&str, &'static str, &'static str)> = model
        .iter()
        .flat_map(|(category, records)| {
            records
                .iter()
                .map(|record| (record.name.as_str(), category.label(), category.title()))
        })
        .collect();
    entries.sort_by_cached_key(|(name, _, _)| name.to_lowercase());

    let mut out = String::from(
        "# Function Index\n\n\
         Alphabetical index of all documented functions with links to \
         detailed documentation.\n\n\
         ---\n\n",
    );

    for (name, label, title) in entries {
        out.push_str(&format!("- {} - {}\n", record_link(name, label), title));
    }

    out
}
