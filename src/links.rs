//! Doc-tree link rewriter.
//!
//! Chapter files were renamed to drop their number prefixes; links inside
//! the documentation tree still point at the old names. This pass rewrites
//! the fixed old-to-new table in every markdown file under a directory,
//! touching only files whose content actually changes.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_MAPPINGS: &[(&str, &str)] = &[
    ("01-introduction.md", "introduction.md"),
    ("02-installation.md", "installation.md"),
    ("03-quickstart.md", "quickstart.md"),
    ("04-environment.md", "environment.md"),
    ("05-configuration.md", "configuration.md"),
    ("06-aliases.md", "aliases.md"),
    ("07-sql-scripts.md", "sql-scripts.md"),
    ("08-functions.md", "functions.md"),
    ("09-troubleshooting.md", "troubleshooting.md"),
    ("10-reference.md", "reference.md"),
    ("11-usage.md", "usage.md"),
    ("12-service-management.md", "service-management.md"),
    ("13-extensions.md", "extensions.md"),
];

/// Rewrite renamed-file links in every `*.md` file directly under `dir`.
/// Returns the paths of the files that were updated.
pub fn fix_links(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("documentation directory not found: {}", dir.display());
    }

    let pattern = dir.join("*.md");
    let pattern = pattern.to_string_lossy();

    let mut updated = Vec::new();
    for entry in
        glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?
    {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if fix_links_in_file(&path)? {
            updated.push(path);
        }
    }
    updated.sort();
    Ok(updated)
}

/// Apply the mapping table to one file. Returns true when the file changed.
fn fix_links_in_file(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let rewritten = rewrite(&content);
    if rewritten == content {
        return Ok(false);
    }

    fs::write(path, &rewritten)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

fn rewrite(content: &str) -> String {
    let mut result = content.to_string();
    for (old, new) in FILE_MAPPINGS {
        result = result.replace(old, new);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_mapped_names() {
        let input = "See [intro](01-introduction.md) and [setup](02-installation.md).";
        assert_eq!(
            rewrite(input),
            "See [intro](introduction.md) and [setup](installation.md)."
        );
    }

    #[test]
    fn leaves_unmapped_content_alone() {
        let input = "See [other](other-page.md).";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(fix_links(Path::new("/nonexistent/docs")).is_err());
    }
}
