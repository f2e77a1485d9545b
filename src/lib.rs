//! Word-level diffing of contract clauses and regex-based PII redaction.
//!
//! The diff aligns two texts along the longest common subsequence of their
//! word and whitespace tokens and reports each side as runs of unchanged,
//! removed or added text, which concatenate back to the exact input.
//!
//! ```
//! use clause_diff::compute_diff;
//!
//! let diff = compute_diff("Payment within 30 days", "Payment within 14 days");
//!
//! assert_eq!(diff.stats().percent_changed(), 25);
//! ```

mod config;
mod consts;
mod diff_engine;
mod diffs;
mod errors;
mod redaction;
mod tokenizer;
mod types;
mod utils;

pub use config::DiffConfig;
pub use consts::DEFAULT_MAX_TOKENS_PER_SIDE;
pub use diff_engine::{compute_diff, get_diff_stats, try_compute_diff};
pub use errors::Error;
pub use redaction::{PiiKind, PiiMatch, RedactedText, Redactor};
pub use tokenizer::{token::Token, word_tokenizer::word_tokenizer};
pub use types::{
    diff_result::DiffResult,
    diff_segment::{DiffSegment, SegmentKind},
    diff_stats::DiffStats,
};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
