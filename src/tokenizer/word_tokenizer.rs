use super::token::Token;

/// Splits text on whitespace boundaries, creating tokens of alternating words
/// and whitespace runs. No character is dropped, so joining the tokens
/// reproduces the input.
///
/// ## Example
///
/// ```not_rust
/// "Hi  there!\n" -> ["Hi", "  ", "there!", "\n"]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_some_and(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(text[previous_boundary_index..i].into());
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(text[previous_boundary_index..].into());
    }

    result
}
