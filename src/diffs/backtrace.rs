use crate::{Token, diffs::alignment::AlignmentMatrix, types::diff_segment::SegmentKind};

/// A single token of one side together with its diff classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub token: Token<'a>,
    pub kind: SegmentKind,
}

impl<'a> TaggedToken<'a> {
    fn new(token: Token<'a>, kind: SegmentKind) -> Self { TaggedToken { token, kind } }
}

/// Walk `table` from its last cell back to the origin and classify every
/// token of both sides. Returns the original side and the suggested side,
/// each in forward document order.
///
/// LCS backtraces aren't unique; on ties between the upper and left
/// predecessors the insertion is taken first, which makes the output stable
/// across implementations.
pub fn backtrace<'a>(
    old: &[Token<'a>],
    new: &[Token<'a>],
    table: &AlignmentMatrix,
) -> (Vec<TaggedToken<'a>>, Vec<TaggedToken<'a>>) {
    debug_assert_eq!(table.rows(), old.len() + 1, "Table doesn't match `old`");
    debug_assert_eq!(table.columns(), new.len() + 1, "Table doesn't match `new`");

    let mut original = Vec::with_capacity(old.len());
    let mut suggested = Vec::with_capacity(new.len());

    let mut i = old.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            original.push(TaggedToken::new(old[i - 1], SegmentKind::Unchanged));
            suggested.push(TaggedToken::new(new[j - 1], SegmentKind::Unchanged));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[(i, j - 1)] >= table[(i - 1, j)]) {
            suggested.push(TaggedToken::new(new[j - 1], SegmentKind::Added));
            j -= 1;
        } else {
            original.push(TaggedToken::new(old[i - 1], SegmentKind::Removed));
            i -= 1;
        }
    }

    original.reverse();
    suggested.reverse();

    (original, suggested)
}
