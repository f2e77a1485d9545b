use std::fmt::Display;

/// A token is the atomic unit of comparison: either a maximal run of
/// non-whitespace characters or a maximal run of whitespace characters.
///
/// Tokens borrow from the text they were cut from, so the concatenation of
/// all tokens of a text is the text itself. Two tokens are equal iff their
/// strings are equal (case-sensitive, whitespace included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self { Token { text } }
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn as_str(&self) -> &'a str { self.text }

    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.text.chars().all(char::is_whitespace) }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_detection() {
        assert!(Token::from(" \t\n").is_whitespace());
        assert!(Token::from("\u{a0}").is_whitespace());
        assert!(!Token::from("clause").is_whitespace());
        assert!(!Token::from("§4.2").is_whitespace());
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Token::from("Party"), Token::from("Party"));
        assert_ne!(Token::from("Party"), Token::from("party"));
        assert_ne!(Token::from(" "), Token::from("  "));
    }
}
