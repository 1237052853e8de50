//! Restore decompiled sources over compiled scripts
//!
//! For every `<stem>.gdc` in the tree the staged `<stem>.gd` is copied in
//! next to it, then the compiled script and its `<stem>.gd.remap` sidecar
//! are removed. The copy always lands before anything is deleted.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{copy_file, remove_file, Error, Result};
use crate::tag;
use crate::walk::walk_files_with_extension;

/// Options for [`restore_sources`]
#[derive(Debug, Clone, Default)]
pub struct RestoreOptions {
    /// Report planned restorations without touching the tree
    pub dry_run: bool,
}

/// Paths involved in restoring one compiled script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restoration {
    /// Decompiled source in the staging directory
    pub staged: PathBuf,
    /// Where the source is restored to
    pub source: PathBuf,
    /// Compiled script that gets removed
    pub compiled: PathBuf,
    /// Remap sidecar that gets removed
    pub remap: PathBuf,
}

impl Restoration {
    /// Plan the restoration of `compiled` from `staging`
    ///
    /// Returns `None` when the file name is not valid UTF-8.
    pub fn plan(compiled: &Path, staging: &Path) -> Option<Self> {
        let stem = tag::stem(compiled)?;
        let source_name = format!("{stem}.{}", tag::SCRIPT_SOURCE);

        Some(Self {
            staged: staging.join(&source_name),
            source: compiled.with_file_name(&source_name),
            compiled: tag::sibling(compiled, stem, tag::COMPILED_SCRIPT),
            remap: tag::sibling(compiled, stem, tag::REMAP_SUFFIX),
        })
    }

    /// Copy the staged source into place, then delete the compiled script and sidecar
    pub fn apply(&self) -> Result<()> {
        copy_file(&self.staged, &self.source).map_err(|err| match err {
            Error::Copy { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound && !self.staged.exists() =>
            {
                Error::MissingStaged {
                    path: self.staged.clone(),
                }
            }
            other => other,
        })?;

        remove_file(&self.compiled)?;
        remove_file(&self.remap)?;
        Ok(())
    }
}

/// Scripts restored by a run, in visit order
#[derive(Debug, Default, Serialize)]
pub struct RestoreReport {
    pub restored: Vec<Restoration>,
}

/// Restore every compiled script under `root` from `staging`
///
/// A compiled script without a staged source, or without its remap sidecar,
/// aborts the pass. Work done before the failure is left in place.
pub fn restore_sources(
    root: &Path,
    staging: &Path,
    options: &RestoreOptions,
) -> Result<RestoreReport> {
    let mut report = RestoreReport::default();

    walk_files_with_extension(root, tag::COMPILED_SCRIPT, |path, depth| {
        let Some(restoration) = Restoration::plan(path, staging) else {
            debug!("Skipping non UTF-8 name {}", path.display());
            return Ok(());
        };

        if !options.dry_run {
            restoration.apply()?;
        }
        info!(depth, "{}", path.display());

        report.restored.push(restoration);
        Ok(())
    })?;

    Ok(report)
}
