use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a run of tokens on one side of a diff.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Present on both sides.
    Unchanged,

    /// Only present in the original text.
    Removed,

    /// Only present in the suggested text.
    Added,
}

impl SegmentKind {
    /// Lowercase name, e.g. for CSS classes in the dashboard.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Unchanged => "unchanged",
            SegmentKind::Removed => "removed",
            SegmentKind::Added => "added",
        }
    }
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of consecutive, same-kind tokens from one side, stored as
/// their concatenated text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    kind: SegmentKind,
    text: String,
}

impl DiffSegment {
    #[must_use]
    pub fn new(kind: SegmentKind, text: String) -> Self { DiffSegment { kind, text } }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Number of whitespace-separated words in the segment.
    #[must_use]
    pub fn word_count(&self) -> usize { self.text.split_whitespace().count() }

    pub(crate) fn push_str(&mut self, text: &str) { self.text.push_str(text); }
}

/// Renders in the style of `git diff --word-diff`: removals as `[-text-]`,
/// additions as `{+text+}` and unchanged text as-is.
impl Display for DiffSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SegmentKind::Unchanged => f.write_str(&self.text),
            SegmentKind::Removed => write!(f, "[-{}-]", self.text),
            SegmentKind::Added => write!(f, "{{+{}+}}", self.text),
        }
    }
}
