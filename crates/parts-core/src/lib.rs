//! Operation layer for parts
//!
//! Wires the filesystem collaborators in `parts-fs` through the pure region
//! engines in `parts-blocks`:
//!
//! ```text
//!                 parts-cli
//!                     |
//!                parts-core
//!                 /       \
//!         parts-fs     parts-blocks
//! ```
//!
//! Each invocation builds one immutable config ([`BuildConfig`] or
//! [`RemoveConfig`]), runs one operation, and gets back an
//! [`OperationReport`] describing what was (or would be) written.
//!
//! # Example
//!
//! ```no_run
//! use parts_core::{BuildConfig, BuildOperation};
//!
//! let config = BuildConfig::new("~/.ssh/config", "~/.ssh/config.d", "#").with_dry_run(true);
//! let report = BuildOperation::new(config).run()?;
//! print!("{}", report.render_preview());
//! # Ok::<(), parts_core::Error>(())
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod partial;
pub mod remove;
pub mod report;

pub use build::BuildOperation;
pub use config::{BuildConfig, RemoveConfig};
pub use error::{Error, Result};
pub use partial::{Partial, load_partials};
pub use remove::RemoveOperation;
pub use report::{OperationKind, OperationReport, Outcome};
