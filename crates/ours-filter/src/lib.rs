//! Streaming extraction of the "ours" side of merge-conflicted content.
//!
//! When a merge stops on conflicts, the working tree copy of each conflicted
//! file holds regions fenced by marker lines (`<<<<<<<`, `|||||||`,
//! `=======`, `>>>>>>>`). [`OursReader`] wraps any byte source and serves the
//! same content with every conflict region reduced to its "ours" section,
//! leaving everything outside the regions untouched byte-for-byte. Marker
//! sequences that fail the shape rules are never an error; they degrade to
//! verbatim pass-through.

pub mod line;
pub mod marker;
pub mod ours;
pub mod scan;

pub use line::LineReader;
pub use marker::MARKER_SIZE;
pub use ours::OursReader;

use std::str::FromStr;

/// Conflict marker style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictStyle {
    /// Default: ours and theirs sections only.
    Merge,
    /// Additionally recognize base content between `|||||||` markers.
    Diff3,
}

impl ConflictStyle {
    /// Parse a style name (as used by `merge.conflictStyle` config).
    ///
    /// Accepted values: "merge", "diff3", "zdiff3". On the reading side
    /// zdiff3 output carries the same markers as diff3, so both map to
    /// [`ConflictStyle::Diff3`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "merge" => Some(Self::Merge),
            "diff3" | "zdiff3" => Some(Self::Diff3),
            _ => None,
        }
    }

    /// Return the canonical config name for this style.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Diff3 => "diff3",
        }
    }
}

/// Error from parsing an unknown conflict style name.
#[derive(Debug, thiserror::Error)]
#[error("unknown conflict style '{0}' (expected merge, diff3, or zdiff3)")]
pub struct ParseConflictStyleError(String);

impl FromStr for ConflictStyle {
    type Err = ParseConflictStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseConflictStyleError(s.to_string()))
    }
}
