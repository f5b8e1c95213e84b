//! Utility functions for text in the post window

/// Non-alphanumeric characters that count as part of a word by default
pub const DEFAULT_EXTRA_WORD_CHARS: &str = "_";

/// Check whether `ch` belongs to a word (alphanumeric or one of `extra`)
#[inline]
pub fn is_word_char(ch: char, extra: &str) -> bool {
    ch.is_alphanumeric() || extra.contains(ch)
}

/// Character span `[start, end)` of the word around a character offset
///
/// The preceding character decides the left bound and the character at
/// `offset` decides the right bound, so an offset right after a word still
/// resolves to that word. Offsets past the end are clamped.
pub fn word_range_at(text: &str, offset: usize, extra: &str) -> (usize, usize) {
    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());

    let mut start = offset;
    while start > 0 && is_word_char(chars[start - 1], extra) {
        start -= 1;
    }

    let mut end = offset;
    while end < chars.len() && is_word_char(chars[end], extra) {
        end += 1;
    }

    (start, end)
}

/// The word surrounding a character offset, using the default word characters
pub fn word_at(text: &str, offset: usize) -> String {
    word_at_with(text, offset, DEFAULT_EXTRA_WORD_CHARS)
}

/// The word surrounding a character offset, with custom extra word characters
pub fn word_at_with(text: &str, offset: usize, extra: &str) -> String {
    let (start, end) = word_range_at(text, offset, extra);
    text.chars().skip(start).take(end - start).collect()
}

/// Pull a selection start back over a leading `~` (environment variable syntax)
pub fn extend_for_env_var(text: &str, start: usize) -> usize {
    if start > 0 && text.chars().nth(start - 1) == Some('~') {
        start - 1
    } else {
        start
    }
}

/// Convert a character column to visual column (screen position).
/// Accounts for tab expansion with the given tab width.
pub fn char_col_to_visual_col(text: &str, char_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut visual_col = 0;

    for (i, ch) in text.chars().enumerate() {
        if i >= char_col {
            break;
        }

        if ch == '\t' {
            visual_col += tab_width - (visual_col % tab_width);
        } else {
            visual_col += 1;
        }
    }

    visual_col
}
