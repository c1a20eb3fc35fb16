// src/util.rs — Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string for display/logging (UTF-8 safe).
///
/// Returns a substring of at most `max_len` bytes, ensuring the cut
/// point falls on a valid UTF-8 character boundary.
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

/// Shorten to `max_len` bytes with a trailing ellipsis when cut.
pub fn ellipsize(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    format!("{}...", truncate_str(s, max_len.saturating_sub(3)))
}

/// Terminal columns `s` occupies. Wide (CJK, emoji) characters count as two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Split `s` after at most `width` columns. A leading character wider than
/// `width` still goes in the head so the split always makes progress.
fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > width && i > 0 {
            return s.split_at(i);
        }
        used += w;
    }
    (s, "")
}

/// Greedy word wrap by display width. Explicit newlines are kept, runs of
/// whitespace collapse, and words wider than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let first_row = rows.len();
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;

            while display_width(word) > width {
                if row_width > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                let (head, tail) = split_at_width(word, width);
                rows.push(head.to_string());
                word = tail;
            }
            if word.is_empty() {
                continue;
            }

            let word_width = display_width(word);
            if row_width > 0 && row_width + 1 + word_width > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if row_width > 0 {
                row.push(' ');
                row_width += 1;
            }
            row.push_str(word);
            row_width += word_width;
        }

        if !row.is_empty() || rows.len() == first_row {
            rows.push(row);
        }
    }

    rows
}

/// Hard wrap by display width, keeping every character (spaces included).
/// Explicit newlines start a new row; an empty paragraph is one empty row.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for c in paragraph.chars() {
            let w = char_width(c);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }

    rows
}
