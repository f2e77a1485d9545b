use thiserror::Error;

use crate::Side;

#[derive(Error, Debug)]
pub enum Error {
    /// The input would make the quadratic alignment table too large.
    #[error("The {side} text has {tokens} tokens, more than the allowed {limit}")]
    InputTooLarge {
        /// The side that exceeded the limit
        side: Side,
        /// The number of word and whitespace tokens on that side
        tokens: usize,
        /// The configured maximum
        limit: usize,
    },

    #[error("Invalid redaction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to parse configuration: {0}")]
    InvalidConfig(String),
}
