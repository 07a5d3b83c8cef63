//! Master index page renderer.
//!
//! The category catalog and "key functions" listing below are curated
//! static content, not derived from the parsed document model. Keep the
//! two in sync by hand when the libraries change.

/// Render the master index page. `generated_on` is the only dynamic part;
/// category pages deliberately carry no timestamp, this page does.
pub fn render(generated_on: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        "{}---\n\n**Last generated:** {}  \n**Generator version:** {}\n",
        CURATED_CONTENT, generated_on, version
    )
}

const CURATED_CONTENT: &str = "\
# API Reference

Complete function reference for the toolkit libraries and scripts.

## Overview

The toolkit provides a comprehensive set of shell functions organized into
logical categories. All functions follow standardized header documentation
including purpose, arguments, return codes, and output specifications.

## Categories

### [Core Utilities](common.md)

Core utility functions used throughout the toolkit including logging, PATH
management, and environment utilities.

**Key Functions:**

- [`dba_log`](common.md#dba_log) - Unified logging with configurable levels
- [`dba_dedupe_path`](common.md#dba_dedupe_path) - Remove duplicate PATH entries
- [`dba_parse_instance_table`](common.md#dba_parse_instance_table) - Parse instance table entries
- [`dba_verify_env`](common.md#dba_verify_env) - Verify environment variables

### [Registry API](registry.md)

Unified interface for installation discovery and management.

**Key Functions:**

- [`dba_registry_get_all`](registry.md#dba_registry_get_all) - Get all installations
- [`dba_registry_get_by_name`](registry.md#dba_registry_get_by_name) - Get installation by name
- [`dba_registry_get_status`](registry.md#dba_registry_get_status) - Check service status
- [`dba_registry_validate_entry`](registry.md#dba_registry_validate_entry) - Validate entry

### [Plugin Interface](plugins.md)

Plugin interface for product-specific functionality.

**Required Plugin Functions:**

- [`plugin_detect_installation`](plugins.md#plugin_detect_installation) - Auto-discover installations
- [`plugin_validate_home`](plugins.md#plugin_validate_home) - Validate a product home
- [`plugin_adjust_environment`](plugins.md#plugin_adjust_environment) - Adjust environment variables
- [`plugin_check_status`](plugins.md#plugin_check_status) - Check service status
- [`plugin_get_version`](plugins.md#plugin_get_version) - Extract version

### [Environment Management](environment.md)

Environment management libraries for building, parsing, validating, and
tracking environments.

**Includes:**

- `dba_env_parser.sh` - Configuration parsing and merging
- `dba_env_builder.sh` - Environment variable building
- `dba_env_validator.sh` - Environment validation
- `dba_env_config.sh` - Configuration management
- `dba_env_status.sh` - Status display
- `dba_env_changes.sh` - Change detection

### [Database Operations](database.md)

Database-specific operations including query execution, status checks, and
database management.

**Key Functions:**

- [`execute_db_query`](database.md#execute_db_query) - Execute SQL with a simplified interface
- [`check_database_status`](database.md#check_database_status) - Check if a database is running
- [`check_listener_status`](database.md#check_listener_status) - Check listener status

### [Alias Management](aliases.md)

Alias generation and management for database environments.

**Key Functions:**

- [`generate_sid_lists`](aliases.md#generate_sid_lists) - Generate SID lists
- [`generate_home_aliases`](aliases.md#generate_home_aliases) - Generate product home aliases

### [Extension System](extensions.md)

Extension system for loading and managing toolkit extensions.

**Key Functions:**

- [`dba_load_extension`](extensions.md#dba_load_extension) - Load extension from directory
- [`dba_list_extensions`](extensions.md#dba_list_extensions) - List available extensions

### [Scripts and Commands](scripts.md)

Command-line scripts and tools for toolkit operations including environment
management, service control, and system utilities.

## See Also

- [Function Index](function-index.md) - Alphabetical function list

";
