//! Filesystem helpers that attach the failing path to every error.

use std::path::Path;

use crate::error::ScaffoldError;

/// Creates `path` and its parents; succeeds if it already exists.
///
/// # Errors
///
/// Returns `ScaffoldError::Io` if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!(path = %path.display(), "directory ready");
    Ok(())
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `ScaffoldError::Io` if the file cannot be written.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Copies `from` to `to`, replacing any existing file.
///
/// # Errors
///
/// Returns `ScaffoldError::Io` naming the destination if the copy fails.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), ScaffoldError> {
    std::fs::copy(from, to).map_err(|e| ScaffoldError::io(to, e))?;
    tracing::debug!(from = %from.display(), to = %to.display(), "copied file");
    Ok(())
}
