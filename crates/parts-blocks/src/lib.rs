//! Managed region merging and removal for parts.
//!
//! A managed region is a span of an aggregate file bounded by two marker
//! comments. With the `#` comment style it looks like this:
//!
//! ```text
//! # ============================
//! # PARTIALS>>>>>
//! # ============================
//! Host server1
//!     User admin
//! # ============================
//! # PARTIALS<<<<<
//! # ============================
//! ```
//!
//! The crate is split into three layers:
//!
//! - [`comment`] resolves a style token (`#`, `//`, `auto`, or any custom
//!   prefix) plus the aggregate file name into a [`CommentStyle`].
//! - [`marker`] renders the start and end [`Markers`] for a style and locates
//!   an existing [`Region`] in content.
//! - [`writer`] replaces or removes the region.
//!
//! Everything here is a pure string transformation. Region detection is a
//! plain substring search, so marker text must never appear inside partial
//! content or detection will pick up the wrong span.

pub mod comment;
pub mod error;
pub mod marker;
pub mod writer;

pub use comment::{AUTO_STYLE, CommentStyle, PREDEFINED_STYLES, detect_style_key};
pub use error::{Error, Result};
pub use marker::{Markers, Region};
pub use writer::{has_region, merge_region, remove_region};
