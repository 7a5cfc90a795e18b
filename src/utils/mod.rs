//! Utility functions for text display

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_width` terminal columns, ensuring the
/// cut lands on a char boundary. Returns the longest prefix that fits.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &s[..idx];
        }
    }
    s
}

/// Upper-case the first letter of every whitespace-separated word.
/// Whitespace itself is preserved as-is.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
