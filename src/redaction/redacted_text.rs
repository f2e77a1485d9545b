use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text with PII replaced by `<LABEL_n>` placeholders, along with the values
/// each placeholder stands for.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedactedText {
    text: String,
    placeholders: BTreeMap<String, String>,
}

impl RedactedText {
    pub(crate) fn new(text: String, placeholders: BTreeMap<String, String>) -> Self {
        Self { text, placeholders }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Placeholder to original value.
    #[must_use]
    pub fn placeholders(&self) -> &BTreeMap<String, String> { &self.placeholders }

    #[must_use]
    pub fn is_redacted(&self) -> bool { !self.placeholders.is_empty() }

    /// Put the original values back into `text`, which is typically derived
    /// from [`RedactedText::text`], e.g. a rewrite suggested for it.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        self.placeholders
            .iter()
            .fold(text.to_owned(), |restored, (placeholder, value)| {
                restored.replace(placeholder, value)
            })
    }
}
