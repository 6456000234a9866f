//! User-supplied path handling
//!
//! Paths arrive from the command line exactly as typed. They are expanded
//! (`~` and `~/...`) and made absolute before any I/O happens, but symlinks
//! are left alone here; see [`crate::io::write_atomic`] for that.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Any other input, including `~user/...` forms, is returned unchanged.
/// If the home directory cannot be determined the input is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home;
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Expand `path` and make it absolute against the current directory.
///
/// The path does not need to exist.
pub fn resolve(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let expanded = match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    std::path::absolute(&expanded).map_err(|source| Error::CurrentDir { source })
}
