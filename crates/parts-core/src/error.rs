//! Error types for parts-core

use std::path::PathBuf;

/// Result type for parts-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in parts-core operations
///
/// Every variant is terminal for the invocation. None of them leave a
/// partially written aggregate file behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Aggregate file missing or unreadable
    #[error("failed to read aggregate file: {0}")]
    SourceRead(#[source] parts_fs::Error),

    /// Partials directory missing or unreadable
    #[error("failed to read partials directory: {0}")]
    PartialsList(#[source] parts_fs::Error),

    /// A single partial file could not be read
    #[error("failed to read partial file: {0}")]
    PartialRead(#[source] parts_fs::Error),

    /// Removal requested but the file has no managed region
    #[error("no partials section found in file '{}' (looking for comment style '{style}')", path.display())]
    RegionNotFound { path: PathBuf, style: String },

    /// Final write of the aggregate file failed
    #[error("failed to write aggregate file: {0}")]
    Write(#[source] parts_fs::Error),

    /// Path resolution and other filesystem errors
    #[error(transparent)]
    Fs(#[from] parts_fs::Error),
}
