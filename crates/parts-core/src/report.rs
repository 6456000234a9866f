//! Operation results and preview rendering

use std::fmt::Write as _;
use std::path::PathBuf;

use parts_blocks::CommentStyle;
use serde::Serialize;

const BEGIN_CONTENT: &str = "--- BEGIN FILE CONTENT ---";
const END_CONTENT: &str = "--- END FILE CONTENT ---";

/// Which operation produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Build,
    Remove,
}

/// What happened to the aggregate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// New content was written
    Written,
    /// Dry run; new content was computed but not written
    Preview,
    /// Dry-run removal found no managed region; nothing to do
    NoRegion,
}

/// Result of a build or remove operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    pub kind: OperationKind,
    /// Resolved aggregate file path
    pub path: PathBuf,
    pub style: CommentStyle,
    pub outcome: Outcome,
    /// Length in bytes of the content that was read
    pub original_len: usize,
    /// Length in bytes of the new content
    pub new_len: usize,
    /// Partial file names in merge order (build only)
    pub partials: Vec<String>,
    /// The new full content
    pub content: String,
}

impl OperationReport {
    pub fn bytes_added(&self) -> usize {
        self.new_len.saturating_sub(self.original_len)
    }

    pub fn bytes_removed(&self) -> usize {
        self.original_len.saturating_sub(self.new_len)
    }

    /// Whether the aggregate file was modified on disk.
    pub fn is_written(&self) -> bool {
        self.outcome == Outcome::Written
    }

    /// Human-readable dry-run report.
    ///
    /// Shows the full would-be content between delimiter lines plus the
    /// byte counts relevant to the operation.
    pub fn render_preview(&self) -> String {
        let path = self.path.display();
        let mut out = String::new();

        if self.outcome == Outcome::NoRegion {
            let _ = writeln!(out, "DRY RUN: No partials section found in '{path}' to remove");
            return out;
        }

        match self.kind {
            OperationKind::Build => {
                let _ = writeln!(out, "DRY RUN: Would write to '{path}'");
                push_content(&mut out, &self.content);
                let _ = writeln!(out, "Total length: {} bytes", self.new_len);
                let _ = writeln!(out, "Added {} bytes", self.bytes_added());
            }
            OperationKind::Remove => {
                let _ = writeln!(out, "DRY RUN: Would remove partials section from '{path}'");
                let _ = writeln!(out, "Original length: {} bytes", self.original_len);
                let _ = writeln!(out, "New length: {} bytes", self.new_len);
                let _ = writeln!(out, "Removed {} bytes", self.bytes_removed());
                push_content(&mut out, &self.content);
            }
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn push_content(out: &mut String, content: &str) {
    out.push_str("Content preview:\n");
    out.push_str(BEGIN_CONTENT);
    out.push('\n');
    out.push_str(content);
    out.push_str(END_CONTENT);
    out.push('\n');
}
