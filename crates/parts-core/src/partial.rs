//! Loading partial fragments from a directory

use std::path::Path;

use crate::{Error, Result};

/// One fragment contributing to the managed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    /// File name within the partials directory.
    pub name: String,
    /// Full file content, unmodified.
    pub content: String,
}

impl AsRef<str> for Partial {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Read every regular file in `dir`, ordered by file name.
///
/// Subdirectories are skipped. The first unreadable file aborts the load so
/// a merge never runs on an incomplete set.
pub fn load_partials(dir: &Path) -> Result<Vec<Partial>> {
    let files = parts_fs::io::list_files(dir).map_err(Error::PartialsList)?;
    tracing::debug!(dir = %dir.display(), count = files.len(), "Enumerated partials");

    files
        .iter()
        .map(|path| -> Result<Partial> {
            let content = parts_fs::io::read_text(path).map_err(Error::PartialRead)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Partial { name, content })
        })
        .collect()
}
