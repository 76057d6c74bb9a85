//! Utility functions for text classification

/// Check if a character can be part of a partial word after a trigger.
///
/// Matches the `\w` character class: alphanumerics plus underscore.
/// Whitespace and punctuation terminate a trigger run.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if a character is a word boundary (anything that is not a word char)
pub fn is_word_boundary(ch: char) -> bool {
    !is_word_char(ch)
}
