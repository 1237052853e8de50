//! Re-link imported assets next to their `.import` metadata
//!
//! Exported projects keep the original assets only under `.import/`. For each
//! `<stem>.import` metadata file in the tree, the first candidate asset whose
//! path contains `<stem>` is copied next to it as `<stem>`.
//!
//! Matching is substring containment over the candidate's full path, in
//! candidate order. Overlapping stems can therefore pick the wrong asset
//! (`foo` matches `foobar.png` before `foo.png`), and a stem matching nothing
//! is skipped silently.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{copy_file, Error, Result};
use crate::tag;
use crate::walk::walk_files_with_extension;

/// Snapshot of the assets available for re-linking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateList {
    paths: Vec<PathBuf>,
}

impl CandidateList {
    /// Collect asset files directly inside `import_dir`, in file-name order
    ///
    /// Only files tagged with one of [`tag::IMPORTED_ASSETS`] are kept.
    pub fn scan(import_dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(import_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| Error::Walk {
                path: source.path().unwrap_or(import_dir).to_path_buf(),
                source,
            })?;

            if entry.file_type().is_file() && tag::has_any_tag(entry.path(), tag::IMPORTED_ASSETS)
            {
                paths.push(entry.into_path());
            }
        }

        Ok(Self { paths })
    }

    /// Collect candidates from `<root>/.import`
    pub fn for_project(root: &Path) -> Result<Self> {
        let import_dir = root.join(tag::IMPORT_DIR);
        let candidates = Self::scan(&import_dir)?;
        if candidates.is_empty() {
            debug!("No importable assets in {}", import_dir.display());
        }
        Ok(candidates)
    }

    /// First candidate whose path contains `stem`
    pub fn find(&self, stem: &str) -> Option<&Path> {
        self.paths
            .iter()
            .find(|p| p.to_string_lossy().contains(stem))
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl From<Vec<PathBuf>> for CandidateList {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

/// Options for [`relink_imports`]
#[derive(Debug, Clone, Default)]
pub struct RelinkOptions {
    /// Report planned copies without touching the tree
    pub dry_run: bool,
}

/// One asset copied next to its metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relinked {
    pub metadata: PathBuf,
    pub candidate: PathBuf,
    pub target: PathBuf,
}

/// Assets re-linked by a run, in visit order
#[derive(Debug, Default, Serialize)]
pub struct RelinkReport {
    pub candidates: usize,
    pub relinked: Vec<Relinked>,
}

/// Copy the matching candidate next to every `.import` file under `root`
pub fn relink_imports(
    root: &Path,
    candidates: &CandidateList,
    options: &RelinkOptions,
) -> Result<RelinkReport> {
    let mut report = RelinkReport {
        candidates: candidates.len(),
        ..Default::default()
    };

    walk_files_with_extension(root, tag::IMPORT_METADATA, |path, depth| {
        let Some(stem) = tag::stem(path) else {
            return Ok(());
        };
        let Some(candidate) = candidates.find(stem) else {
            return Ok(());
        };

        let target = path.with_file_name(stem);
        if !options.dry_run {
            copy_file(candidate, &target)?;
        }
        info!(depth, "{} <- {}", target.display(), candidate.display());

        report.relinked.push(Relinked {
            metadata: path.to_path_buf(),
            candidate: candidate.to_path_buf(),
            target,
        });
        Ok(())
    })?;

    Ok(report)
}
