//! Merging partials into an aggregate file

use parts_blocks::{Markers, has_region, merge_region};

use crate::config::BuildConfig;
use crate::partial::load_partials;
use crate::report::{OperationKind, OperationReport, Outcome};
use crate::{Error, Result};

/// Replaces (or appends) the managed region of the aggregate file with the
/// concatenated contents of the partials directory.
#[derive(Debug, Clone)]
pub struct BuildOperation {
    config: BuildConfig,
    markers: Markers,
}

impl BuildOperation {
    pub fn new(config: BuildConfig) -> Self {
        let markers = config.markers();
        Self { config, markers }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// The exact marker text this operation searches for and writes.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Run the merge.
    ///
    /// All reads complete before anything is written, and the write is a
    /// single atomic replace, so a failure at any step leaves the aggregate
    /// file as it was.
    pub fn run(&self) -> Result<OperationReport> {
        let path = parts_fs::resolve(self.config.aggregate_file())?;
        let partials_dir = parts_fs::resolve(self.config.partials_dir())?;

        let original = parts_fs::io::read_text(&path).map_err(Error::SourceRead)?;
        let partials = load_partials(&partials_dir)?;

        let replaced = has_region(&original, &self.markers);
        let content = merge_region(&original, &self.markers, &partials);
        tracing::debug!(
            path = %path.display(),
            replaced,
            partials = partials.len(),
            original_len = original.len(),
            new_len = content.len(),
            "Merged partials"
        );

        let outcome = if self.config.dry_run() {
            tracing::info!(path = %path.display(), "Dry run, not writing aggregate file");
            Outcome::Preview
        } else {
            parts_fs::io::write_text(&path, &content).map_err(Error::Write)?;
            Outcome::Written
        };

        Ok(OperationReport {
            kind: OperationKind::Build,
            path,
            style: self.config.resolved_style(),
            outcome,
            original_len: original.len(),
            new_len: content.len(),
            partials: partials.into_iter().map(|p| p.name).collect(),
            content,
        })
    }
}
