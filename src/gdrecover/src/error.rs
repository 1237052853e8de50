//! Error type shared by every pass.

use std::path::PathBuf;

/// Errors raised while walking or mutating a project tree
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Staged source {path} does not exist")]
    MissingStaged { path: PathBuf },

    #[error("Refusing to copy {path} onto itself")]
    SameFile { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Copy `from` to `to`, creating or overwriting `to`
///
/// `from` and `to` must not name the same file; copying a file onto itself
/// truncates it.
pub(crate) fn copy_file(from: &std::path::Path, to: &std::path::Path) -> Result<u64> {
    if let Ok(true) = same_file::is_same_file(from, to) {
        return Err(Error::SameFile {
            path: to.to_path_buf(),
        });
    }

    std::fs::copy(from, to).map_err(|source| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

pub(crate) fn remove_file(path: &std::path::Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}
