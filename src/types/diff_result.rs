#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DiffSegment, DiffStats, SegmentKind};

/// Word-level comparison of an original and a suggested text, as two
/// parallel sequences of annotated segments.
///
/// The original side only contains `Unchanged` and `Removed` segments, the
/// suggested side only `Unchanged` and `Added` ones. Concatenating either
/// side's segments reproduces that side's text exactly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    original: Vec<DiffSegment>,
    suggested: Vec<DiffSegment>,
}

impl DiffResult {
    #[must_use]
    pub fn new(original: Vec<DiffSegment>, suggested: Vec<DiffSegment>) -> Self {
        debug_assert!(
            original.iter().all(|s| s.kind() != SegmentKind::Added),
            "The original side cannot contain additions"
        );
        debug_assert!(
            suggested.iter().all(|s| s.kind() != SegmentKind::Removed),
            "The suggested side cannot contain removals"
        );

        Self {
            original,
            suggested,
        }
    }

    #[must_use]
    pub fn original(&self) -> &[DiffSegment] { &self.original }

    #[must_use]
    pub fn suggested(&self) -> &[DiffSegment] { &self.suggested }

    #[must_use]
    pub fn original_text(&self) -> String { self.original.iter().map(DiffSegment::text).collect() }

    #[must_use]
    pub fn suggested_text(&self) -> String {
        self.suggested.iter().map(DiffSegment::text).collect()
    }

    /// Whether the two texts were identical.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.original
            .iter()
            .chain(&self.suggested)
            .all(|segment| segment.kind() == SegmentKind::Unchanged)
    }

    #[must_use]
    pub fn stats(&self) -> DiffStats { DiffStats::from_segments(&self.original, &self.suggested) }

    #[must_use]
    pub fn into_parts(self) -> (Vec<DiffSegment>, Vec<DiffSegment>) {
        (self.original, self.suggested)
    }
}
