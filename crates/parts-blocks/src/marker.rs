//! Region markers and region location
//!
//! The rendered marker text is matched byte-for-byte against files written
//! by earlier runs. Changing the format below orphans every region already
//! on disk.

use crate::comment::CommentStyle;

const START_LABEL: &str = "PARTIALS>>>>>";
const END_LABEL: &str = "PARTIALS<<<<<";
const RULE: &str = "============================";

/// The start and end markers bounding a managed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: String,
}

/// Byte span of a managed region inside some content.
///
/// `start` is the first byte of the start marker. `end` is one past the last
/// byte of the end marker, extended by one if a newline follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Markers {
    /// Render the markers for a comment style.
    ///
    /// # Example
    /// ```
    /// use parts_blocks::{CommentStyle, Markers};
    ///
    /// let markers = Markers::for_style(&CommentStyle::block("/*", "*/"));
    /// assert_eq!(markers.start(), "/*\n/* PARTIALS>>>>>\n*/");
    /// ```
    pub fn for_style(style: &CommentStyle) -> Self {
        Self {
            start: render(style, START_LABEL),
            end: render(style, END_LABEL),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Locate the managed region in `content`.
    ///
    /// The region closes at the first end marker following the first start
    /// marker, and opens at the last start marker before that end marker.
    /// Stray end markers ahead of the region and stray start markers inside
    /// it are skipped. Returns `None` when no start marker is followed by an
    /// end marker.
    pub fn locate(&self, content: &str) -> Option<Region> {
        let first_start = content.find(&self.start)?;
        let search_from = first_start + self.start.len();
        let Some(offset) = content[search_from..].find(&self.end) else {
            tracing::debug!(first_start, "No end marker after start marker");
            return None;
        };
        let end_marker = search_from + offset;

        let start = content[..end_marker].rfind(&self.start).unwrap_or(first_start);
        if start != first_start {
            tracing::debug!(first_start, start, "Skipping unpaired start marker");
        }

        let mut end = end_marker + self.end.len();
        if content[end..].starts_with('\n') {
            end += 1;
        }

        Some(Region { start, end })
    }
}

fn render(style: &CommentStyle, label: &str) -> String {
    let start = style.start();
    if style.is_block() {
        format!("{start}\n{start} {label}\n{}", style.end())
    } else {
        format!("{start} {RULE}\n{start} {label}\n{start} {RULE}")
    }
}
