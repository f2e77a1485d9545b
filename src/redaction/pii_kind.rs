use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Categories of personally identifiable information that can be detected
/// with regular expressions alone.
///
/// Declaration order doubles as priority when two matches of different kinds
/// start at the same position and have the same length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PiiKind {
    EmailAddress,
    UsSsn,
    IbanCode,
    CreditCard,
    IpAddress,
    UsPassport,
    UsDriverLicense,
    PhoneNumber,
}

impl PiiKind {
    pub const ALL: [PiiKind; 8] = [
        PiiKind::EmailAddress,
        PiiKind::UsSsn,
        PiiKind::IbanCode,
        PiiKind::CreditCard,
        PiiKind::IpAddress,
        PiiKind::UsPassport,
        PiiKind::UsDriverLicense,
        PiiKind::PhoneNumber,
    ];

    /// Name used inside placeholders, e.g. `<EMAIL_1>`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PiiKind::EmailAddress => "EMAIL",
            PiiKind::UsSsn => "SSN",
            PiiKind::IbanCode => "BANK_ACCOUNT",
            PiiKind::CreditCard => "CREDIT_CARD",
            PiiKind::IpAddress => "IP_ADDRESS",
            PiiKind::UsPassport => "PASSPORT",
            PiiKind::UsDriverLicense => "LICENSE",
            PiiKind::PhoneNumber => "PHONE",
        }
    }

    /// If the pattern has a capture group, only the group is the PII; the
    /// rest is the keyword context that makes a bare number recognisable.
    pub(crate) fn pattern(&self) -> &'static str {
        match self {
            PiiKind::EmailAddress => r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b",
            PiiKind::UsSsn => r"\b\d{3}-\d{2}-\d{4}\b",
            PiiKind::IbanCode => r"\b[A-Z]{2}\d{2}(?:\s?[A-Z0-9]{4}){2,7}(?:\s?[A-Z0-9]{1,4})?\b",
            PiiKind::CreditCard => r"\b(?:\d[ -]?){12,18}\d\b",
            PiiKind::IpAddress => {
                r"\b(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)\b"
            }
            PiiKind::UsPassport => {
                r"(?i)\bpassport(?:\s+(?:no\.?|number|#))?[:\s#]*([A-Z]?\d{8,9})\b"
            }
            PiiKind::UsDriverLicense => {
                r"(?i)\b(?:driver'?s?\s+licen[cs]e|DL)(?:\s+(?:no\.?|number|#))?[:\s#]*([A-Z]{0,2}\d{5,13})\b"
            }
            PiiKind::PhoneNumber => {
                r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]\d{4}\b"
            }
        }
    }

    /// Extra check on top of the pattern for kinds that carry a checksum.
    pub(crate) fn validate(&self, candidate: &str) -> bool {
        match self {
            PiiKind::CreditCard => passes_luhn_check(candidate),
            _ => true,
        }
    }
}

impl Display for PiiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.label()) }
}

fn passes_luhn_check(candidate: &str) -> bool {
    let checksum: u32 = candidate
        .chars()
        .filter_map(|c| c.to_digit(10))
        .rev()
        .enumerate()
        .map(|(i, digit)| match (i % 2, digit * 2) {
            (0, _) => digit,
            (_, doubled) if doubled > 9 => doubled - 9,
            (_, doubled) => doubled,
        })
        .sum();

    checksum % 10 == 0
}
