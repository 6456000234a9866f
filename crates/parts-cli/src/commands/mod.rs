//! Command implementations for parts-cli

pub mod build;
pub mod remove;

pub use build::run_build;
pub use remove::run_remove;

use colored::Colorize;
use parts_core::OperationReport;

use crate::error::Result;

/// How a finished report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a finished report.
///
/// Dry runs print the full preview; written reports print a one-line
/// `summary` status.
fn print_report(report: &OperationReport, format: OutputFormat, summary: &str) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Human if report.is_written() => {
            println!("{} {}", "OK".green().bold(), summary);
        }
        OutputFormat::Human => print!("{}", report.render_preview()),
    }
    Ok(())
}
