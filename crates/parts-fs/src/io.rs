//! Whole-file I/O: text reads, partial enumeration, atomic replacement

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Read text content from a file.
///
/// Invalid UTF-8 is reported as an I/O error with kind `InvalidData`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Entries that are directories (following symlinks) are skipped. The sort
/// is a byte-wise comparison of file names, so the result does not depend
/// on the order the platform happens to return directory entries in.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "Skipping directory entry");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Write content atomically to a file.
///
/// Uses a write-to-temp-then-rename strategy so readers only ever see the
/// old or the new content. The temp file is held under an exclusive
/// advisory lock while it is written. When `path` is a symlink the link is
/// preserved and its target is replaced. Permissions of an existing target
/// are carried over to the new file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = if path.is_symlink() {
        dunce::canonicalize(path).map_err(|e| Error::io(path, e))?
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let result = write_temp_and_rename(&target, &temp_path, content);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp_and_rename(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Ok(metadata) = fs::metadata(target) {
        temp_file
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    // Lock is released when the handle drops
    drop(temp_file);

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))?;
    tracing::debug!(path = %target.display(), bytes = content.len(), "Wrote file atomically");

    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
