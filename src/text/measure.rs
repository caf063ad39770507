//! Column width measurement
//!
//! Three lengths matter for terminal text: bytes (storage), chars (code
//! points) and columns (what the terminal actually draws). Only columns
//! decide alignment.

use crate::style::strip_styles;
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

/// Columns occupied by a single code point.
///
/// Zero-width code points (combining marks, joiners, variation selectors)
/// take 0, East Asian Wide and Fullwidth take 2, everything else takes 1.
/// Control characters count as 1 so that a stray ESC is never invisible.
pub fn char_columns(c: char) -> usize {
    if c.is_control() {
        return 1;
    }
    match c.width() {
        Some(0) => 0,
        Some(2) => 2,
        _ => 1,
    }
}

/// Sum of columns over already-stripped text
pub(crate) fn raw_columns(text: &str) -> usize {
    text.chars().map(char_columns).sum()
}

/// Rendered column width of `s`, ignoring style sequences.
///
/// # Examples
///
/// ```
/// use bankterm::measure;
///
/// assert_eq!(measure("abc"), 3);
/// assert_eq!(measure("\x1b[31m日本\x1b[0m"), 4);
/// assert_eq!(measure("e\u{301}"), 1);
/// ```
pub fn measure(s: &str) -> usize {
    if s.is_ascii() && !s.contains('\x1b') {
        return s.len();
    }
    raw_columns(&strip_styles(s))
}

/// The three lengths of a string side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub bytes: usize,
    pub chars: usize,
    pub columns: usize,
}

pub fn metrics(s: &str) -> Metrics {
    Metrics {
        bytes: s.len(),
        chars: s.chars().count(),
        columns: measure(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure(""), 0);
    }

    #[test]
    fn test_measure_ascii() {
        assert_eq!(measure("hello world"), 11);
    }

    #[test]
    fn test_measure_ignores_styles() {
        assert_eq!(measure("\x1b[1m\x1b[36mhello\x1b[0m"), 5);
        assert_eq!(measure("\x1b[38;2;255;215;0mP\x1b[0m"), 1);
    }

    #[test]
    fn test_measure_wide_glyphs() {
        assert_eq!(measure("日本語"), 6);
        assert_eq!(measure("Ｒ"), 2); // fullwidth latin
        assert_eq!(measure("🏦"), 2);
    }

    #[test]
    fn test_measure_combining_marks() {
        // "é" spelled as e + COMBINING ACUTE ACCENT
        assert_eq!(measure("cafe\u{301}"), 4);
    }

    #[test]
    fn test_measure_variation_selector() {
        assert_eq!(measure("✅\u{FE0F}"), measure("✅"));
    }

    #[test]
    fn test_measure_lone_escape_counts() {
        // Unterminated sequences are text: ESC, '[', '3', '1'
        assert_eq!(measure("\x1b[31"), 4);
    }

    #[test]
    fn test_char_columns() {
        assert_eq!(char_columns('a'), 1);
        assert_eq!(char_columns('日'), 2);
        assert_eq!(char_columns('\u{301}'), 0);
        assert_eq!(char_columns('\x1b'), 1);
    }

    #[test]
    fn test_metrics_three_lengths() {
        let m = metrics("\x1b[32mR$ 1.000,00\x1b[0m 💰");
        assert_eq!(m.columns, 14);
        assert_eq!(m.chars, 22);
        assert!(m.bytes > m.chars);
    }
}
