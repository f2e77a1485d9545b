use log::{debug, warn};

use crate::{
    DiffConfig, DiffResult, DiffStats, Side, Token,
    diffs::{alignment::AlignmentMatrix, backtrace::backtrace},
    errors::Error,
    utils::group_segments::group_segments,
    word_tokenizer,
};

/// Compare `original` with `suggested` word by word.
///
/// Both texts are split into alternating word and whitespace tokens, aligned
/// along their longest common subsequence and grouped into runs of
/// unchanged, removed (original side) and added (suggested side) text.
///
/// The function is total: any two strings, including empty ones, produce a
/// valid result. Time and memory grow with the product of the two token
/// counts, so prefer [`try_compute_diff`] for input of unbounded size.
///
/// ```
/// use clause_diff::{SegmentKind, compute_diff};
///
/// let diff = compute_diff("the quick fox", "the slow fox");
///
/// assert_eq!(diff.original()[1].kind(), SegmentKind::Removed);
/// assert_eq!(diff.original()[1].text(), "quick");
/// assert_eq!(diff.suggested()[1].text(), "slow");
/// assert_eq!(diff.original_text(), "the quick fox");
/// ```
#[must_use]
pub fn compute_diff(original: &str, suggested: &str) -> DiffResult {
    let old = word_tokenizer(original);
    let new = word_tokenizer(suggested);

    diff_tokens(&old, &new)
}

/// Word-change statistics of turning `original` into `suggested`.
///
/// ```
/// use clause_diff::get_diff_stats;
///
/// let stats = get_diff_stats("alpha beta", "gamma delta");
///
/// assert_eq!(stats.words_removed(), 2);
/// assert_eq!(stats.words_added(), 2);
/// assert_eq!(stats.percent_changed(), 100);
/// ```
#[must_use]
pub fn get_diff_stats(original: &str, suggested: &str) -> DiffStats {
    compute_diff(original, suggested).stats()
}

/// Same as [`compute_diff`] but refuses to build the alignment table when
/// either side has more tokens than `config.max_tokens_per_side`.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] naming the first side over the limit.
pub fn try_compute_diff(
    original: &str,
    suggested: &str,
    config: &DiffConfig,
) -> Result<DiffResult, Error> {
    let old = word_tokenizer(original);
    let new = word_tokenizer(suggested);

    for (side, tokens) in [(Side::Original, old.len()), (Side::Suggested, new.len())] {
        if tokens > config.max_tokens_per_side {
            warn!(
                "Refusing to diff the {side} text: {tokens} tokens exceed the limit of {}",
                config.max_tokens_per_side
            );

            return Err(Error::InputTooLarge {
                side,
                tokens,
                limit: config.max_tokens_per_side,
            });
        }
    }

    Ok(diff_tokens(&old, &new))
}

fn diff_tokens(old: &[Token<'_>], new: &[Token<'_>]) -> DiffResult {
    let table = AlignmentMatrix::new(old, new);
    debug!(
        "Aligned {} original and {} suggested tokens, LCS length {}",
        old.len(),
        new.len(),
        table.lcs_len()
    );

    let (original, suggested) = backtrace(old, new, &table);

    DiffResult::new(group_segments(original), group_segments(suggested))
}
