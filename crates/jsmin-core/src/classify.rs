//! Character classes that drive whitespace decisions.

/// Letters, digits, `_`, `$`, backslash and anything above ASCII `~`.
///
/// Whitespace between two of these must survive or identifiers merge.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '\\' || (c as u32) > 126
}

/// [`is_word_char`] lifted over the end-of-input sentinel.
pub fn is_word(c: Option<char>) -> bool {
    c.is_some_and(is_word_char)
}
