//! Removing the managed region from an aggregate file

use parts_blocks::{Markers, remove_region};

use crate::config::RemoveConfig;
use crate::report::{OperationKind, OperationReport, Outcome};
use crate::{Error, Result};

/// Strips the managed region from the aggregate file.
#[derive(Debug, Clone)]
pub struct RemoveOperation {
    config: RemoveConfig,
    markers: Markers,
}

impl RemoveOperation {
    pub fn new(config: RemoveConfig) -> Self {
        let markers = config.markers();
        Self { config, markers }
    }

    pub fn config(&self) -> &RemoveConfig {
        &self.config
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Run the removal.
    ///
    /// # Errors
    /// `Error::RegionNotFound` when the file has no complete region, unless
    /// this is a dry run; a dry run reports `Outcome::NoRegion` instead.
    pub fn run(&self) -> Result<OperationReport> {
        let path = parts_fs::resolve(self.config.aggregate_file())?;
        let original = parts_fs::io::read_text(&path).map_err(Error::SourceRead)?;

        let mut report = OperationReport {
            kind: OperationKind::Remove,
            path,
            style: self.config.resolved_style(),
            outcome: Outcome::Preview,
            original_len: original.len(),
            new_len: original.len(),
            partials: Vec::new(),
            content: String::new(),
        };

        let content = match remove_region(&original, &self.markers) {
            Ok(content) => content,
            Err(parts_blocks::Error::RegionNotFound) if self.config.dry_run() => {
                tracing::info!(path = %report.path.display(), "No managed region to remove");
                report.outcome = Outcome::NoRegion;
                report.content = original;
                return Ok(report);
            }
            Err(parts_blocks::Error::RegionNotFound) => {
                return Err(Error::RegionNotFound {
                    path: report.path,
                    style: self.config.comment_style().to_string(),
                });
            }
        };

        tracing::debug!(
            path = %report.path.display(),
            removed = original.len().saturating_sub(content.len()),
            "Removed managed region"
        );

        if !self.config.dry_run() {
            parts_fs::io::write_text(&report.path, &content).map_err(Error::Write)?;
            report.outcome = Outcome::Written;
        }

        report.new_len = content.len();
        report.content = content;
        Ok(report)
    }
}
