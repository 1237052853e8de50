//! Flat collection of compiled scripts
//!
//! Copies every file with a given extension tag out of a tree into one
//! destination directory, keeping only the file name. Files that share a
//! name overwrite each other and the last one visited wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::tag;
use crate::walk::walk_files_with_extension;

/// Options for [`collect`]
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Extension tag to collect, without the dot
    pub extension: String,
    /// List matches without copying anything
    pub dry_run: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extension: tag::COMPILED_SCRIPT.to_string(),
            dry_run: false,
        }
    }
}

/// Files collected by a run, in visit order
#[derive(Debug, Default, Serialize)]
pub struct CollectReport {
    pub copied: Vec<CollectedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedFile {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl CollectReport {
    /// Number of distinct target files the run produced
    pub fn unique_targets(&self) -> usize {
        let mut targets: Vec<_> = self.copied.iter().map(|f| &f.target).collect();
        targets.sort();
        targets.dedup();
        targets.len()
    }
}

/// Copy every file under `root` tagged `options.extension` into `dest`
///
/// `dest` must already exist; it is never created and never receives
/// subdirectories. The first I/O error aborts the run.
pub fn collect(root: &Path, dest: &Path, options: &CollectOptions) -> Result<CollectReport> {
    let mut report = CollectReport::default();

    walk_files_with_extension(root, &options.extension, |path, depth| {
        let Some(name) = path.file_name() else {
            return Ok(());
        };
        let target = dest.join(name);

        if !options.dry_run {
            crate::error::copy_file(path, &target)?;
        }
        info!(depth, "{}", path.display());

        report.copied.push(CollectedFile {
            source: path.to_path_buf(),
            target,
        });
        Ok(())
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn list_dir(path: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(path)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_collect_flattens_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        let dest = temp_dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        write(&root.join("a/x.gdc"), "x");
        write(&root.join("b/y.gdc"), "y");
        write(&root.join("b/y.gd.remap"), "remap");
        write(&root.join("c/d/readme.txt"), "txt");

        let report = collect(&root, &dest, &CollectOptions::default()).unwrap();

        assert_eq!(report.copied.len(), 2);
        assert_eq!(list_dir(&dest), vec!["x.gdc", "y.gdc"]);
        assert_eq!(fs::read_to_string(dest.join("x.gdc")).unwrap(), "x");
        assert!(fs::read_dir(&dest).unwrap().all(|e| e.unwrap().path().is_file()));
    }

    #[test]
    fn test_collect_last_visited_wins_on_collision() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        let dest = temp_dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        write(&root.join("a/player.gdc"), "first");
        write(&root.join("b/player.gdc"), "second");

        let report = collect(&root, &dest, &CollectOptions::default()).unwrap();

        assert_eq!(report.copied.len(), 2);
        assert_eq!(report.unique_targets(), 1);
        assert_eq!(fs::read_to_string(dest.join("player.gdc")).unwrap(), "second");
    }

    #[test]
    fn test_collect_missing_dest_aborts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        write(&root.join("x.gdc"), "x");

        let err = collect(&root, &temp_dir.path().join("nope"), &CollectOptions::default())
            .unwrap_err();

        assert!(matches!(err, Error::Copy { .. }));
        assert!(!temp_dir.path().join("nope").exists());
    }

    #[test]
    fn test_collect_other_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        let dest = temp_dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        write(&root.join("x.gdc"), "x");
        write(&root.join("sub/x.gd"), "source");

        let options = CollectOptions {
            extension: "gd".to_string(),
            ..Default::default()
        };
        collect(&root, &dest, &options).unwrap();

        assert_eq!(list_dir(&dest), vec!["x.gd"]);
    }

    #[test]
    fn test_collect_dry_run_copies_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        let dest = temp_dir.path().join("dest");
        fs::create_dir(&dest).unwrap();
        write(&root.join("a/x.gdc"), "x");

        let options = CollectOptions {
            dry_run: true,
            ..Default::default()
        };
        let report = collect(&root, &dest, &options).unwrap();

        assert_eq!(report.copied.len(), 1);
        assert_eq!(report.copied[0].target, dest.join("x.gdc"));
        assert!(list_dir(&dest).is_empty());
    }

    #[test]
    fn test_collect_into_dest_inside_root_aborts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("root");
        let dest = root.join("z");
        fs::create_dir_all(&dest).unwrap();
        write(&root.join("a/x.gdc"), "payload");

        // z/x.gdc is visited after a/x.gdc was copied there
        let err = collect(&root, &dest, &CollectOptions::default()).unwrap_err();

        assert!(matches!(err, Error::SameFile { ref path } if path == &dest.join("x.gdc")));
        assert_eq!(fs::read_to_string(dest.join("x.gdc")).unwrap(), "payload");
        assert_eq!(fs::read_to_string(root.join("a/x.gdc")).unwrap(), "payload");
    }
}
