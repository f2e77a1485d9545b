use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_TOKENS_PER_SIDE;
#[cfg(feature = "serde")]
use crate::errors::Error;

/// Limits applied by [`crate::try_compute_diff`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Upper bound on the number of word and whitespace tokens per side. The
    /// alignment table holds `(original + 1) * (suggested + 1)` cells.
    #[cfg_attr(feature = "serde", serde(default = "default_max_tokens_per_side"))]
    pub max_tokens_per_side: usize,
}

fn default_max_tokens_per_side() -> usize {
    debug!("Using default max tokens per side: {DEFAULT_MAX_TOKENS_PER_SIDE}");
    DEFAULT_MAX_TOKENS_PER_SIDE
}

impl DiffConfig {
    #[must_use]
    pub fn new(max_tokens_per_side: usize) -> Self { Self { max_tokens_per_side } }

    /// Parse a YAML document such as `max_tokens_per_side: 2000`. Missing
    /// keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the document isn't valid YAML or
    /// has values of the wrong type.
    #[cfg(feature = "serde")]
    pub fn from_yaml_str(contents: &str) -> Result<Self, Error> {
        serde_yaml::from_str(contents).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_tokens_per_side: default_max_tokens_per_side(),
        }
    }
}
