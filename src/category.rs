//! Category classifier — maps a source file name to its category.

use crate::model::{Category, CategoryConfig};

/// Classify a source file into exactly one category.
///
/// Resolution order: exact-filename override table, plugin naming rules,
/// script namespace prefix, then the Scripts fallback. Total — every input
/// resolves to a category.
pub fn classify(file_name: &str, config: &CategoryConfig) -> Category {
    let basename = basename(file_name);

    if let Some((_, category)) = config
        .overrides
        .iter()
        .find(|(name, _)| name == basename)
    {
        return *category;
    }

    if basename.ends_with("_plugin.sh") || basename == "plugin_interface.sh" {
        return Category::Plugins;
    }

    if basename.starts_with(&config.script_prefix) {
        return Category::Scripts;
    }

    Category::Scripts
}

/// Final path component of a file name.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
