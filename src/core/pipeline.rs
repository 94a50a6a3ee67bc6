//! One full run: catalog, scan, match, generate.
//!
//! Every run is a cold scan; nothing is cached between invocations.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::catalog::Catalog;
use super::codegen::{CodegenOptions, generate};
use super::file_scanner::scan_files;
use super::library::LibraryProfile;
use super::matcher::{MarkupUsage, UsageResult, match_usage};
use super::template::{TemplateUsage, extract_usage};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub markup_root: PathBuf,
    pub library_root: PathBuf,
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub codegen: CodegenOptions,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Registration code, `None` when nothing from the library is used.
    pub generated: Option<String>,
    pub usage: UsageResult,
    pub catalog_components: usize,
    pub catalog_directives: usize,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

pub fn run_pipeline(options: &PipelineOptions, profile: &LibraryProfile) -> Result<PipelineResult> {
    ensure_markup_root(&options.markup_root)?;

    let catalog = Catalog::load(&options.library_root, profile)?;

    let scan = scan_files(
        &options.markup_root,
        &options.extensions,
        &options.ignores,
        options.verbose,
    );
    let markup = scan_markup_files(&scan.files)?;

    let usage = match_usage(&markup, &catalog, profile.directive_marker);
    let generated = generate(&usage, profile, &options.codegen);

    Ok(PipelineResult {
        generated,
        usage,
        catalog_components: catalog.components.len(),
        catalog_directives: catalog.directives.len(),
        files_scanned: scan.files.len(),
        skipped_count: scan.skipped_count,
    })
}

pub fn ensure_markup_root(markup_root: &Path) -> Result<()> {
    if !markup_root.is_dir() {
        bail!(
            "Markup directory does not exist or is not a directory: {}",
            markup_root.display()
        );
    }
    Ok(())
}

/// Read and analyze every file, merging their usage.
///
/// The first unreadable or malformed file aborts the scan.
pub fn scan_markup_files(files: &[PathBuf]) -> Result<MarkupUsage> {
    let mut merged = MarkupUsage::default();
    for file in files {
        merged.merge(scan_markup_file(file)?);
    }
    Ok(merged)
}

fn scan_markup_file(file: &Path) -> Result<TemplateUsage> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    extract_usage(&source).with_context(|| format!("Failed to parse {}", file.display()))
}
