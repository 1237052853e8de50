//! # gdrecover
//!
//! Housekeeping for Godot projects recovered from an exported build.
//!
//! This library provides functionality to:
//! - Collect compiled scripts (`.gdc`) from a tree into one flat directory
//! - Restore decompiled `.gd` sources from a staging directory, dropping the
//!   compiled script and its `.gd.remap` sidecar
//! - Re-link imported assets from `.import/` next to their `.import` metadata
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> gdrecover::Result<()> {
//! let root = Path::new("exported");
//!
//! let report = gdrecover::reconcile(root, Path::new("decompiled"), &Default::default())?;
//! println!("Restored {} scripts", report.restore.map_or(0, |r| r.restored.len()));
//! # Ok(())
//! # }
//! ```

pub mod collect;
pub mod error;
pub mod reconcile;
pub mod relink;
pub mod restore;
pub mod tag;
pub mod walk;

#[doc(inline)]
pub use collect::{collect, CollectOptions, CollectReport, CollectedFile};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use reconcile::{reconcile, ReconcileOptions, ReconcileReport};
#[doc(inline)]
pub use relink::{relink_imports, CandidateList, RelinkOptions, RelinkReport, Relinked};
#[doc(inline)]
pub use restore::{restore_sources, Restoration, RestoreOptions, RestoreReport};
