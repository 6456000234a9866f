//! Region merge and removal.
//!
//! Both operations take the full content and return the full new content.
//! Merging is idempotent: any existing region is cut out before the fresh
//! one is appended, so repeated runs never accumulate regions or blank lines.

use crate::error::{Error, Result};
use crate::marker::Markers;

/// Checks if `content` contains a complete managed region.
pub fn has_region(content: &str, markers: &Markers) -> bool {
    markers.locate(content).is_some()
}

/// Replaces the managed region with the given partials, or appends one.
///
/// An existing region is removed along with one newline that follows it.
/// The remaining content is newline-terminated, then the start marker,
/// each partial followed by a newline, and the end marker are appended.
/// A lone start or end marker is not a region and is left in place.
///
/// # Example
/// ```
/// use parts_blocks::{CommentStyle, Markers, merge_region};
///
/// let markers = Markers::for_style(&CommentStyle::line("#"));
/// let once = merge_region("Host a\n", &markers, ["Host b"]);
/// let twice = merge_region(&once, &markers, ["Host b"]);
/// assert_eq!(once, twice);
/// assert!(once.starts_with("Host a\n# ====="));
/// ```
pub fn merge_region<I, S>(content: &str, markers: &Markers, partials: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = match markers.locate(content) {
        Some(region) => {
            tracing::debug!(start = region.start, end = region.end, "Replacing existing region");
            let mut kept = String::with_capacity(content.len());
            kept.push_str(&content[..region.start]);
            kept.push_str(&content[region.end..]);
            kept
        }
        None => content.to_string(),
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }

    output.push_str(markers.start());
    output.push('\n');
    for partial in partials {
        output.push_str(partial.as_ref());
        output.push('\n');
    }
    output.push_str(markers.end());
    output.push('\n');

    output
}

/// Removes the managed region from the content.
///
/// Trailing newlines before the region collapse to exactly one so removal
/// does not leave a growing gap where the region used to be.
///
/// # Errors
/// Returns `Error::RegionNotFound` if the content has no complete region.
///
/// # Example
/// ```
/// use parts_blocks::{CommentStyle, Markers, merge_region, remove_region};
///
/// let markers = Markers::for_style(&CommentStyle::line("#"));
/// let merged = merge_region("Host a\n", &markers, ["Host b"]);
/// assert_eq!(remove_region(&merged, &markers).unwrap(), "Host a\n");
/// ```
pub fn remove_region(content: &str, markers: &Markers) -> Result<String> {
    let region = markers.locate(content).ok_or(Error::RegionNotFound)?;

    let before = content[..region.start].trim_end_matches('\n');
    let after = &content[region.end..];

    let mut output = String::with_capacity(before.len() + 1 + after.len());
    output.push_str(before);
    output.push('\n');
    output.push_str(after);

    Ok(output)
}
