#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{DiffSegment, SegmentKind};

/// Aggregate word counts of a diff.
///
/// Words are counted by splitting segment text on whitespace, so a
/// multi-word segment contributes every word it contains.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    words_removed: usize,
    words_added: usize,
    percent_changed: usize,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl DiffStats {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(words_removed: usize, words_added: usize, percent_changed: usize) -> Self {
        Self {
            words_removed,
            words_added,
            percent_changed,
        }
    }

    #[cfg_attr(feature = "wasm", wasm_bindgen(getter = wordsRemoved))]
    #[must_use]
    pub fn words_removed(&self) -> usize { self.words_removed }

    #[cfg_attr(feature = "wasm", wasm_bindgen(getter = wordsAdded))]
    #[must_use]
    pub fn words_added(&self) -> usize { self.words_added }

    /// Share of changed words relative to twice the original word count, as a
    /// whole percentage between 0 and 100.
    #[cfg_attr(feature = "wasm", wasm_bindgen(getter = percentChanged))]
    #[must_use]
    pub fn percent_changed(&self) -> usize { self.percent_changed }
}

impl DiffStats {
    /// Derive the statistics from the two annotated sides of a diff.
    #[must_use]
    pub fn from_segments(original: &[DiffSegment], suggested: &[DiffSegment]) -> Self {
        let words_removed = count_words(original, SegmentKind::Removed);
        let words_added = count_words(suggested, SegmentKind::Added);
        let total_original_words = original.iter().map(DiffSegment::word_count).sum();

        Self::new(
            words_removed,
            words_added,
            percent_changed(words_removed + words_added, total_original_words),
        )
    }
}

fn count_words(segments: &[DiffSegment], kind: SegmentKind) -> usize {
    segments
        .iter()
        .filter(|segment| segment.kind() == kind)
        .map(DiffSegment::word_count)
        .sum()
}

/// `round(changed / (total * 2) * 100)` with halves rounded up, evaluated on
/// integers so that e.g. 1/6 doesn't depend on float representation.
fn percent_changed(changed_words: usize, total_original_words: usize) -> usize {
    if total_original_words == 0 {
        return 0;
    }

    let percent = (100 * changed_words + total_original_words) / (2 * total_original_words);

    percent.min(100)
}
