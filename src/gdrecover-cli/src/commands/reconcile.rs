//! Restore, relink and reconcile command handlers

use anyhow::{Context, Result};
use gdrecover::{
    CandidateList, ReconcileOptions, RelinkOptions, RelinkReport, RestoreOptions, RestoreReport,
};
use std::path::Path;

use super::emit;

/// Restore decompiled sources from `staging` over every compiled script
pub fn restore(root: &Path, staging: &Path, list: bool, json: bool) -> Result<()> {
    let report = gdrecover::restore_sources(root, staging, &RestoreOptions { dry_run: list })
        .with_context(|| format!("Failed to restore sources under {}", root.display()))?;

    emit(json, &report, |report| print_restore(report, list))
}

/// Copy assets from `<root>/.import` next to their metadata files
pub fn relink(root: &Path, list: bool, json: bool) -> Result<()> {
    let candidates = CandidateList::for_project(root)
        .with_context(|| format!("Failed to read imported assets of {}", root.display()))?;

    let report = gdrecover::relink_imports(root, &candidates, &RelinkOptions { dry_run: list })
        .with_context(|| format!("Failed to relink assets under {}", root.display()))?;

    emit(json, &report, |report| print_relink(report, list))
}

/// Run both passes
pub fn reconcile(root: &Path, staging: &Path, options: &ReconcileOptions, json: bool) -> Result<()> {
    let report = gdrecover::reconcile(root, staging, options)
        .with_context(|| format!("Failed to reconcile {}", root.display()))?;

    emit(json, &report, |report| {
        if let Some(restore) = &report.restore {
            print_restore(restore, options.dry_run);
        }
        if let Some(relink) = &report.relink {
            print_relink(relink, options.dry_run);
        }
    })
}

fn print_restore(report: &RestoreReport, list: bool) {
    if list {
        for r in &report.restored {
            println!("{} <- {}", r.source.display(), r.staged.display());
        }
        println!("Would restore {} scripts", report.restored.len());
    } else {
        println!("Restored {} scripts", report.restored.len());
    }
}

fn print_relink(report: &RelinkReport, list: bool) {
    if list {
        for r in &report.relinked {
            println!("{} <- {}", r.target.display(), r.candidate.display());
        }
        println!(
            "Would relink {} assets from {} candidates",
            report.relinked.len(),
            report.candidates
        );
    } else {
        println!(
            "Relinked {} assets from {} candidates",
            report.relinked.len(),
            report.candidates
        );
    }
}
