//! Remove command implementation

use parts_core::{RemoveConfig, RemoveOperation};

use super::{OutputFormat, print_report};
use crate::error::Result;

/// Run the remove command
pub fn run_remove(config: RemoveConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!(
        aggregate = %config.aggregate_file().display(),
        style = config.comment_style(),
        "Removing partials section"
    );

    let report = RemoveOperation::new(config).run()?;

    let summary = format!(
        "Removed partials section from '{}' (style {})",
        report.path.display(),
        report.style
    );
    print_report(&report, format, &summary)
}
