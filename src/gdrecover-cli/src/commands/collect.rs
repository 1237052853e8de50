//! Collect command handler

use anyhow::{Context, Result};
use gdrecover::{CollectOptions, CollectReport};
use std::path::Path;

use super::emit;

/// Copy every file tagged `extension` under `root` into `output`
pub fn handle(root: &Path, output: &Path, extension: &str, list: bool, json: bool) -> Result<()> {
    let options = CollectOptions {
        extension: extension.trim_start_matches('.').to_string(),
        dry_run: list,
    };

    let report = gdrecover::collect(root, output, &options).with_context(|| {
        format!(
            "Failed to collect .{} files from {}",
            options.extension,
            root.display()
        )
    })?;

    emit(json, &report, |report| print_summary(report, output, &options))
}

fn print_summary(report: &CollectReport, output: &Path, options: &CollectOptions) {
    if options.dry_run {
        for file in &report.copied {
            println!("{}", file.source.display());
        }
        println!("Found {} matching files", report.copied.len());
    } else {
        println!(
            "Collected {} .{} files into {} ({} unique names)",
            report.copied.len(),
            options.extension,
            output.display(),
            report.unique_targets()
        );
    }
}
