//! Full reconciliation: restore sources, then re-link imported assets.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::relink::{relink_imports, CandidateList, RelinkOptions, RelinkReport};
use crate::restore::{restore_sources, RestoreOptions, RestoreReport};

/// Options for [`reconcile`]
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    pub skip_restore: bool,
    pub skip_relink: bool,
    pub dry_run: bool,
}

/// Outcome of each pass that ran
#[derive(Debug, Default, Serialize)]
pub struct ReconcileReport {
    pub restore: Option<RestoreReport>,
    pub relink: Option<RelinkReport>,
}

/// Restore every compiled script under `root` from `staging`, then re-link
/// assets from `<root>/.import`
///
/// The candidate list is built after the restore pass has finished.
pub fn reconcile(root: &Path, staging: &Path, options: &ReconcileOptions) -> Result<ReconcileReport> {
    let mut report = ReconcileReport::default();

    if !options.skip_restore {
        info!("Restoring sources under {}", root.display());
        let restore_options = RestoreOptions {
            dry_run: options.dry_run,
        };
        report.restore = Some(restore_sources(root, staging, &restore_options)?);
    }

    if !options.skip_relink {
        info!("Re-linking imported assets under {}", root.display());
        let candidates = CandidateList::for_project(root)?;
        let relink_options = RelinkOptions {
            dry_run: options.dry_run,
        };
        report.relink = Some(relink_imports(root, &candidates, &relink_options)?);
    }

    Ok(report)
}
