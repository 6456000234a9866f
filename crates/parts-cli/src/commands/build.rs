//! Build command implementation
//!
//! Merges the partials directory into the aggregate file.

use parts_core::{BuildConfig, BuildOperation};

use super::{OutputFormat, print_report};
use crate::error::Result;

/// Run the build command
pub fn run_build(config: BuildConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!(
        aggregate = %config.aggregate_file().display(),
        partials = %config.partials_dir().display(),
        style = config.comment_style(),
        "Building partials section"
    );

    let report = BuildOperation::new(config).run()?;

    let summary = format!(
        "Merged {} partial(s) into '{}' (style {})",
        report.partials.len(),
        report.path.display(),
        report.style
    );
    print_report(&report, format, &summary)
}
