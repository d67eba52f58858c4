// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

//! Error types for polygon chain operations.

use thiserror::Error;

use crate::polygon::SegIdx;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer than three distinct points remained after merging duplicates.
    #[error("degenerate ring: only {retained} distinct vertices (need at least 3)")]
    DegenerateRing { retained: usize },

    /// `mnext`/`mprev` of a segment are not mutually inverse.
    #[error("monotone links of segment {segment} are not mutually inverse")]
    BrokenMonoLink { segment: SegIdx },

    /// Walking `mnext` from a segment does not return to it.
    #[error("monotone cycle starting at segment {segment} does not close")]
    OpenMonoCycle { segment: SegIdx },
}
