//! Data model for extracted function documentation — format-agnostic.

use std::collections::BTreeMap;

/// One parsed function header block.
///
/// Built by the header parser and never mutated afterwards. A record is only
/// kept when `name` is non-empty; every other field may be empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    /// Originating file, used for display and category classification.
    pub source_file: String,
    /// Single-line summary from the Purpose field.
    pub purpose: String,
    /// Argument descriptions, one entry per line, insertion order preserved.
    pub arguments: Vec<String>,
    /// Single-line Returns field.
    pub returns: String,
    /// Single-line Output field.
    pub output: String,
    /// Free-text notes, continuation lines joined with newlines.
    pub notes: String,
}

/// Closed set of documentation categories.
///
/// Variant order is the canonical page-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Common,
    Registry,
    Plugins,
    Environment,
    Database,
    Aliases,
    Extensions,
    Scripts,
}

impl Category {
    #[allow(dead_code)]
    pub const ALL: [Category; 8] = [
        Category::Common,
        Category::Registry,
        Category::Plugins,
        Category::Environment,
        Category::Database,
        Category::Aliases,
        Category::Extensions,
        Category::Scripts,
    ];

    /// Stable label used for output file names and links.
    pub fn label(self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Database => "database",
            Category::Registry => "registry",
            Category::Aliases => "aliases",
            Category::Environment => "environment",
            Category::Extensions => "extensions",
            Category::Plugins => "plugins",
            Category::Scripts => "scripts",
        }
    }

    /// Display title for the category page heading.
    pub fn title(self) -> &'static str {
        match self {
            Category::Common => "Core Utilities",
            Category::Database => "Database Operations",
            Category::Registry => "Registry API",
            Category::Aliases => "Alias Management",
            Category::Environment => "Environment Management",
            Category::Extensions => "Extension System",
            Category::Plugins => "Plugin Interface",
            Category::Scripts => "Scripts and Commands",
        }
    }

    /// Description paragraph rendered under the category page heading.
    pub fn description(self) -> &'static str {
        match self {
            Category::Common => {
                "Core utility functions used throughout the toolkit including \
                 logging, PATH management, and environment utilities."
            }
            Category::Database => {
                "Database-specific operations including query execution, status \
                 checks, and database management."
            }
            Category::Registry => {
                "Unified interface for installation discovery and management, \
                 combining the instance table and the homes configuration."
            }
            Category::Aliases => {
                "Alias generation and management for database environments."
            }
            Category::Environment => {
                "Environment management libraries for building, parsing, \
                 validating, and tracking environments."
            }
            Category::Extensions => {
                "Extension system for loading and managing toolkit extensions."
            }
            Category::Plugins => {
                "Plugin interface for product-specific functionality (database, \
                 client, java, and others)."
            }
            Category::Scripts => {
                "Command-line scripts and tools for toolkit operations."
            }
        }
    }
}

/// Classifier configuration: the exact-filename override table and the
/// namespace prefix that marks command scripts.
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub overrides: Vec<(String, Category)>,
    pub script_prefix: String,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        let overrides = [
            ("dba_common.sh", Category::Common),
            ("dba_db_functions.sh", Category::Database),
            ("dba_registry.sh", Category::Registry),
            ("dba_aliases.sh", Category::Aliases),
            ("dba_env_builder.sh", Category::Environment),
            ("dba_env_changes.sh", Category::Environment),
            ("dba_env_config.sh", Category::Environment),
            ("dba_env_parser.sh", Category::Environment),
            ("dba_env_status.sh", Category::Environment),
            ("dba_env_validator.sh", Category::Environment),
            ("extensions.sh", Category::Extensions),
        ]
        .into_iter()
        .map(|(name, cat)| (name.to_string(), cat))
        .collect();

        CategoryConfig {
            overrides,
            script_prefix: "dba_".to_string(),
        }
    }
}

/// The in-memory documentation set: category → records sorted by name.
///
/// Categories with no records are absent. Built once per run and discarded
/// after rendering.
pub type DocModel = BTreeMap<Category, Vec<Record>>;
