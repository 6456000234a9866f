//! Per-invocation operation configuration
//!
//! Built once from user input and read-only afterwards. Paths are kept as
//! given; tilde expansion and absolutization happen when the operation runs.

use std::path::{Path, PathBuf};

use parts_blocks::{CommentStyle, Markers};

/// Configuration for merging partials into an aggregate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    aggregate_file: PathBuf,
    partials_dir: PathBuf,
    comment_style: String,
    dry_run: bool,
}

impl BuildConfig {
    pub fn new(
        aggregate_file: impl Into<PathBuf>,
        partials_dir: impl Into<PathBuf>,
        comment_style: impl Into<String>,
    ) -> Self {
        Self {
            aggregate_file: aggregate_file.into(),
            partials_dir: partials_dir.into(),
            comment_style: comment_style.into(),
            dry_run: false,
        }
    }

    /// Compute the result without writing it.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn aggregate_file(&self) -> &Path {
        &self.aggregate_file
    }

    pub fn partials_dir(&self) -> &Path {
        &self.partials_dir
    }

    /// The style token exactly as given, e.g. `#` or `auto`.
    pub fn comment_style(&self) -> &str {
        &self.comment_style
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// The comment style resolved against the aggregate file name.
    pub fn resolved_style(&self) -> CommentStyle {
        CommentStyle::resolve(&self.comment_style, &self.aggregate_file)
    }

    pub fn markers(&self) -> Markers {
        Markers::for_style(&self.resolved_style())
    }
}

/// Configuration for removing the managed region from an aggregate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveConfig {
    aggregate_file: PathBuf,
    comment_style: String,
    dry_run: bool,
}

impl RemoveConfig {
    pub fn new(aggregate_file: impl Into<PathBuf>, comment_style: impl Into<String>) -> Self {
        Self {
            aggregate_file: aggregate_file.into(),
            comment_style: comment_style.into(),
            dry_run: false,
        }
    }

    /// Report what would be removed without writing. A missing region is
    /// reported instead of failing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn aggregate_file(&self) -> &Path {
        &self.aggregate_file
    }

    pub fn comment_style(&self) -> &str {
        &self.comment_style
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn resolved_style(&self) -> CommentStyle {
        CommentStyle::resolve(&self.comment_style, &self.aggregate_file)
    }

    pub fn markers(&self) -> Markers {
        Markers::for_style(&self.resolved_style())
    }
}
