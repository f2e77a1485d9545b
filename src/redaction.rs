//! Regex-based PII pre-filter for text that leaves the application, e.g. for
//! LLM analysis.
//!
//! Only kinds with a recognisable surface form are covered; names and postal
//! addresses require NER models and are passed through.
use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use log::info;
use regex::Regex;

use crate::errors::Error;

pub mod pii_kind;
pub mod redacted_text;

pub use pii_kind::PiiKind;
pub use redacted_text::RedactedText;

/// A detected piece of PII as a byte range of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiiMatch {
    pub kind: PiiKind,
    pub start: usize,
    pub end: usize,
}

impl PiiMatch {
    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

/// Finds and replaces PII. Immutable once built and cheap to share between
/// threads.
#[derive(Debug, Clone)]
pub struct Redactor {
    patterns: Vec<(PiiKind, Regex)>,
}

impl Redactor {
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a pattern fails to compile.
    pub fn new(kinds: &[PiiKind]) -> Result<Self, Error> {
        let mut kinds = kinds.to_vec();
        kinds.sort_unstable();
        kinds.dedup();

        let patterns = kinds
            .into_iter()
            .map(|kind| Regex::new(kind.pattern()).map(|regex| (kind, regex)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// A redactor for every supported kind, as used before contract analysis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a pattern fails to compile.
    pub fn legal() -> Result<Self, Error> { Self::new(&PiiKind::ALL) }

    /// Non-overlapping PII matches in document order. Of overlapping
    /// candidates, the one starting first wins, then the longer one, then the
    /// kind declared first in [`PiiKind`].
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<PiiMatch> {
        let mut candidates = self
            .patterns
            .iter()
            .flat_map(|(kind, regex)| {
                regex
                    .captures_iter(text)
                    .filter_map(|captures| captures.get(1).or_else(|| captures.get(0)))
                    .filter(move |m| kind.validate(m.as_str()))
                    .map(move |m| PiiMatch {
                        kind: *kind,
                        start: m.start(),
                        end: m.end(),
                    })
            })
            .collect::<Vec<_>>();

        candidates.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.len().cmp(&a.len()))
                .then(a.kind.cmp(&b.kind))
        });

        let mut result: Vec<PiiMatch> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if result.last().is_none_or(|last| candidate.start >= last.end) {
                result.push(candidate);
            }
        }

        result
    }

    /// Replace every match with a numbered placeholder. Repeated values share
    /// a placeholder, so `restore` is unambiguous.
    ///
    /// ```
    /// use clause_diff::Redactor;
    ///
    /// let redactor = Redactor::legal().unwrap();
    /// let redacted = redactor.redact("Contact jane.doe@company.org or call 555-123-4567.");
    ///
    /// assert_eq!(redacted.text(), "Contact <EMAIL_1> or call <PHONE_1>.");
    /// assert_eq!(
    ///     redacted.restore(redacted.text()),
    ///     "Contact jane.doe@company.org or call 555-123-4567."
    /// );
    /// ```
    #[must_use]
    pub fn redact(&self, text: &str) -> RedactedText {
        if text.trim().is_empty() {
            return RedactedText::new(text.to_owned(), BTreeMap::new());
        }

        let matches = self.analyze(text);
        if matches.is_empty() {
            info!("No PII entities detected in text");
            return RedactedText::new(text.to_owned(), BTreeMap::new());
        }

        let mut redacted = String::with_capacity(text.len());
        let mut assigned: HashMap<(PiiKind, &str), String> = HashMap::new();
        let mut next_index: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut position = 0;

        for PiiMatch { kind, start, end } in &matches {
            let value = &text[*start..*end];
            let placeholder = match assigned.entry((*kind, value)) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let index = next_index.entry(kind.label()).or_default();
                    let mut placeholder;
                    // Skip placeholders already spelled out in the input.
                    loop {
                        *index += 1;
                        placeholder = format!("<{}_{index}>", kind.label());
                        if !text.contains(&placeholder) {
                            break;
                        }
                    }
                    entry.insert(placeholder)
                }
            };

            redacted.push_str(&text[position..*start]);
            redacted.push_str(placeholder);
            position = *end;

            *counts.entry(kind.label()).or_default() += 1;
        }
        redacted.push_str(&text[position..]);

        info!("Redacted {} PII entities: {counts:?}", matches.len());

        let placeholders = assigned
            .into_iter()
            .map(|((_, value), placeholder)| (placeholder, value.to_owned()))
            .collect();

        RedactedText::new(redacted, placeholders)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const AGREEMENT: &str = "This Non-Disclosure Agreement is entered into by John Smith (email: \
                             john.smith@example.com, phone: 555-123-4567, SSN: 123-45-6789) \
                             residing at 123 Main Street, New York, NY 10001 and Jane Doe \
                             (jane.doe@company.org). Payment shall be made to IBAN: \
                             DE89370400440532013000.";

    fn redactor() -> Redactor { Redactor::legal().unwrap() }

    #[test]
    fn test_redact_agreement() {
        let redacted = redactor().redact(AGREEMENT);

        assert_snapshot!(
            redacted.text(),
            @"This Non-Disclosure Agreement is entered into by John Smith (email: <EMAIL_1>, phone: <PHONE_1>, SSN: <SSN_1>) residing at 123 Main Street, New York, NY 10001 and Jane Doe (<EMAIL_2>). Payment shall be made to IBAN: <BANK_ACCOUNT_1>."
        );
        assert_eq!(
            redacted.placeholders().get("<EMAIL_2>").map(String::as_str),
            Some("jane.doe@company.org")
        );
        assert_eq!(redacted.placeholders().len(), 5);
        assert_eq!(redacted.restore(redacted.text()), AGREEMENT);
    }

    #[test_case("Card: 4111 1111 1111 1111", "Card: <CREDIT_CARD_1>" ; "credit card")]
    #[test_case("Card: 4111 1111 1111 1112", "Card: 4111 1111 1111 1112" ; "invalid checksum")]
    #[test_case("Server at 192.168.0.12.", "Server at <IP_ADDRESS_1>." ; "ip address")]
    #[test_case("Call (555) 123-4567", "Call <PHONE_1>" ; "phone with area code")]
    #[test_case("Call +1 555 123 4567", "Call <PHONE_1>" ; "international phone")]
    #[test_case("Net 30 days, 2% discount", "Net 30 days, 2% discount" ; "no pii")]
    fn test_redact(text: &str, expected: &str) {
        assert_eq!(redactor().redact(text).text(), expected);
    }

    #[test]
    fn test_repeated_values_share_placeholder() {
        let redacted = redactor().redact("a@b.io wrote to c@d.io and cc'd a@b.io");

        assert_eq!(redacted.text(), "<EMAIL_1> wrote to <EMAIL_2> and cc'd <EMAIL_1>");
        assert_eq!(redacted.placeholders().len(), 2);
    }

    #[test_case("Passport No. C03005988 issued", "Passport No. <PASSPORT_1> issued" ; "passport")]
    #[test_case("passport: 123456789", "passport: <PASSPORT_1>" ; "numeric passport")]
    #[test_case("Driver's License: D1234567", "Driver's License: <LICENSE_1>" ; "driver license")]
    #[test_case("DL #A12345678", "DL #<LICENSE_1>" ; "abbreviated driver license")]
    #[test_case("Order 123456789 shipped", "Order 123456789 shipped" ; "number without context")]
    fn test_redact_identity_documents(text: &str, expected: &str) {
        let redacted = redactor().redact(text);

        assert_eq!(redacted.text(), expected);
        assert_eq!(redacted.restore(redacted.text()), text);
    }

    #[test]
    fn test_existing_placeholder_text_round_trips() {
        let text = "Use the template <EMAIL_1> and write to x@y.io";
        let redacted = redactor().redact(text);

        assert_eq!(redacted.text(), "Use the template <EMAIL_1> and write to <EMAIL_2>");
        assert_eq!(redacted.restore(redacted.text()), text);
    }

    #[test]
    fn test_blank_input() {
        for text in ["", "  \n\t"] {
            let redacted = redactor().redact(text);

            assert_eq!(redacted.text(), text);
            assert!(!redacted.is_redacted());
        }
    }

    #[test]
    fn test_only_selected_kinds() {
        let redactor = Redactor::new(&[PiiKind::EmailAddress]).unwrap();

        assert_eq!(
            redactor.redact("x@y.com, 123-45-6789").text(),
            "<EMAIL_1>, 123-45-6789"
        );
    }

    #[test]
    fn test_analyze_positions() {
        let text = "SSN 123-45-6789";

        assert_eq!(
            redactor().analyze(text),
            vec![PiiMatch {
                kind: PiiKind::UsSsn,
                start: 4,
                end: 15
            }]
        );
    }

    #[test]
    fn test_restore_suggestion() {
        let redacted = redactor().redact("Notices go to legal@acme.com.");

        assert_eq!(
            redacted.restore("All notices must be sent in writing to <EMAIL_1>."),
            "All notices must be sent in writing to legal@acme.com."
        );
    }
}
