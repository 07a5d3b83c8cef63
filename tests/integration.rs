use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_fndoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_renders_blocks() {
    let input = fs::read_to_string(fixture_path("dba_common.sh")).unwrap();
    let expected = fs::read_to_string(fixture_path("dba_common.expected.md")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdin_mode_empty_input_produces_nothing() {
    cmd()
        .write_stdin("echo no headers here\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// -- file mode --

#[test]
fn file_mode_writes_category_pages_and_indexes() {
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(fixture_path("dba_common.sh"))
        .assert()
        .success();

    let common = fs::read_to_string(out.path().join("common.md")).unwrap();
    assert!(common.starts_with("# Core Utilities\n\n"));
    // Records sorted by name: dedupe_path < log < verify_env (byte order).
    let dedupe = common.find("### `dba_dedupe_path`").unwrap();
    let log = common.find("### `dba_log`").unwrap();
    let verify = common.find("### `dba_verify_env`").unwrap();
    assert!(dedupe < log && log < verify);

    let index = fs::read_to_string(out.path().join("index.md")).unwrap();
    assert!(index.contains("**Last generated:**"));

    let fn_index = fs::read_to_string(out.path().join("function-index.md")).unwrap();
    assert!(fn_index.contains("- [`dba_log`](common.md#dba_log) - Core Utilities\n"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("dba_common.sh"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_splits_categories_by_classifier() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // One file in the override table, one matching no rule.
    fs::write(
        src.path().join("dba_registry.sh"),
        "# Function: dba_registry_get_all\n# Purpose.: Get all installations\n# ------\n",
    )
    .unwrap();
    fs::write(
        src.path().join("helper.sh"),
        "# Function: helper_run\n# Purpose.: Run a helper\n# ------\n",
    )
    .unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .args(["--lib-dir", src.path().to_str().unwrap()])
        .assert()
        .success();

    let registry = fs::read_to_string(out.path().join("registry.md")).unwrap();
    assert!(registry.contains("### `dba_registry_get_all`"));

    let scripts = fs::read_to_string(out.path().join("scripts.md")).unwrap();
    assert!(scripts.contains("### `helper_run`"));

    // No records landed in the other categories.
    assert!(!out.path().join("common.md").exists());
}

#[test]
fn file_mode_scans_plugins_subdirectory() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::create_dir(src.path().join("plugins")).unwrap();
    fs::write(
        src.path().join("plugins/database_plugin.sh"),
        "# Function: plugin_check_status\n# Purpose.: Check service status\n# ------\n",
    )
    .unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .args(["--lib-dir", src.path().to_str().unwrap()])
        .assert()
        .success();

    let plugins = fs::read_to_string(out.path().join("plugins.md")).unwrap();
    assert!(plugins.contains("### `plugin_check_status`"));
}

#[test]
fn category_pages_are_idempotent_across_runs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for out in [&first, &second] {
        cmd()
            .args(["-o", out.path().to_str().unwrap()])
            .arg(fixture_path("dba_common.sh"))
            .assert()
            .success();
    }

    for name in ["common.md", "function-index.md"] {
        let a = fs::read(first.path().join(name)).unwrap();
        let b = fs::read(second.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn unreadable_input_is_fatal() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // Invalid UTF-8 cannot be read into a string.
    let bad = src.path().join("broken.sh");
    fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(bad.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// -- link-fix mode --

#[test]
fn fix_links_rewrites_only_changed_files() {
    let docs = TempDir::new().unwrap();
    fs::write(
        docs.path().join("guide.md"),
        "See [intro](01-introduction.md) for details.\n",
    )
    .unwrap();
    fs::write(docs.path().join("clean.md"), "Nothing to rewrite here.\n").unwrap();

    cmd()
        .args(["--fix-links", docs.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 files"));

    let guide = fs::read_to_string(docs.path().join("guide.md")).unwrap();
    assert_eq!(guide, "See [intro](introduction.md) for details.\n");

    let clean = fs::read_to_string(docs.path().join("clean.md")).unwrap();
    assert_eq!(clean, "Nothing to rewrite here.\n");
}

#[test]
fn fix_links_missing_directory_fails() {
    cmd()
        .args(["--fix-links", "/nonexistent/docs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
