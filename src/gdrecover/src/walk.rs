//! Depth-first tree traversal
//!
//! Every directory's entries are read up front and visited in file-name
//! order, so a handler may create or delete siblings of the file it is
//! given without disturbing the rest of the walk.

use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::tag;

/// Walk every regular file under `root`, calling `handler` with its path and depth
///
/// Directories are always descended into and symbolic links are followed.
/// The first error, from the traversal or the handler, stops the walk.
pub fn walk_files<F>(root: &Path, mut handler: F) -> Result<()>
where
    F: FnMut(&Path, usize) -> Result<()>,
{
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;

        if entry.file_type().is_dir() {
            info!(depth = entry.depth(), "{}", entry.path().display());
        } else if entry.file_type().is_file() {
            handler(entry.path(), entry.depth())?;
        }
    }

    Ok(())
}

/// Walk files under `root` whose extension tag is exactly `extension`
///
/// Extension should not include the dot (e.g., "gdc" not ".gdc").
pub fn walk_files_with_extension<F>(root: &Path, extension: &str, mut handler: F) -> Result<()>
where
    F: FnMut(&Path, usize) -> Result<()>,
{
    walk_files(root, |path, depth| {
        if tag::has_tag(path, extension) {
            handler(path, depth)?;
        }
        Ok(())
    })
}
