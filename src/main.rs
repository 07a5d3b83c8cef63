//! fndoc — generate categorized API documentation from function headers
//! embedded in shell source files.
//!
//! Supports three modes:
//!
//! - **stdin mode**: `fndoc < file.sh` — render extracted blocks to stdout
//! - **file mode**: `fndoc --lib-dir src/lib --bin-dir src/bin -o src/doc/api`
//! - **link-fix mode**: `fndoc --fix-links src/doc`

mod aggregate;
mod category;
mod links;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use model::CategoryConfig;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fndoc",
    about = "Generate categorized API documentation from function headers in shell sources"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted along with the
    /// directory roots, reads a single file from stdin.
    files: Vec<String>,

    /// Library root, scanned with *.sh and plugins/*.sh
    #[arg(long)]
    lib_dir: Option<PathBuf>,

    /// Script root, scanned with *.sh
    #[arg(long)]
    bin_dir: Option<PathBuf>,

    /// Output directory (required when inputs are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Rewrite renamed-file links in *.md files under DIR, then exit
    #[arg(long, value_name = "DIR")]
    fix_links: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.fix_links {
        return fix_links_mode(dir);
    }

    if cli.files.is_empty() && cli.lib_dir.is_none() && cli.bin_dir.is_none() {
        return stdin_mode();
    }

    file_mode(&cli)
}

/// stdin mode: parse one file's content from stdin, render the extracted
/// blocks to stdout in source order. Debugging aid for header authors.
fn stdin_mode() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    for record in parser::scan(&input, "stdin") {
        print!("{}", render::category::render_record(&record));
    }
    Ok(())
}

/// file mode: scan the configured input set, build the document model, and
/// write category pages, the master index, and the function index.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when inputs are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let config = CategoryConfig::default();
    let input_files = collect_inputs(cli)?;

    let mut classified = Vec::new();
    let mut total = 0;
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let source_file = path.to_string_lossy().to_string();

        let records = parser::scan(&content, &source_file);
        if records.is_empty() {
            continue;
        }

        println!(
            "[INFO]   {}: {} functions",
            path.file_name().unwrap_or_default().to_string_lossy(),
            records.len()
        );
        total += records.len();

        let category = category::classify(&source_file, &config);
        classified.extend(records.into_iter().map(|r| (r, category)));
    }
    println!("[INFO] Total functions found: {total}");

    let model = aggregate::build(classified);

    for (category, records) in &model {
        let out_path = output_dir.join(format!("{}.md", category.label()));
        fs::write(&out_path, render::category::render(*category, records))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        println!(
            "[INFO] Generated {} ({} functions)",
            out_path.display(),
            records.len()
        );
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let index_path = output_dir.join("index.md");
    fs::write(&index_path, render::index::render(&today))
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    let fn_index_path = output_dir.join("function-index.md");
    fs::write(&fn_index_path, render::function_index::render(&model))
        .with_context(|| format!("failed to write {}", fn_index_path.display()))?;

    Ok(())
}

/// link-fix mode: rewrite renamed-file links in a documentation tree.
fn fix_links_mode(dir: &Path) -> Result<()> {
    let updated = links::fix_links(dir)?;
    for path in &updated {
        println!(
            "[INFO] Updated: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    println!("[INFO] Updated {} files", updated.len());
    Ok(())
}

/// Glob patterns applied under the library root; the plugins subdirectory
/// is scanned alongside the top level.
const LIB_PATTERNS: &[&str] = &["*.sh", "plugins/*.sh"];

/// Expand the configured input set: explicit files and glob patterns, plus
/// the fixed patterns under the lib and bin roots. Sorted and deduplicated
/// for deterministic traversal.
fn collect_inputs(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut files = expand_globs(&cli.files)?;

    if let Some(ref lib_dir) = cli.lib_dir {
        for pattern in LIB_PATTERNS {
            files.extend(glob_under(lib_dir, pattern)?);
        }
    }
    if let Some(ref bin_dir) = cli.bin_dir {
        files.extend(glob_under(bin_dir, "*.sh")?);
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Expand explicit file arguments and glob patterns into real file paths.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {pattern}");
        }
        files.extend(matches);
    }
    Ok(files)
}

/// Expand one glob pattern relative to a root directory.
fn glob_under(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = root.join(pattern);
    let full = full.to_string_lossy();
    let files = glob::glob(&full)
        .with_context(|| format!("invalid glob pattern: {full}"))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    Ok(files)
}
