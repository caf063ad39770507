//! Width-bounded truncation that keeps style sequences intact

use super::measure::{char_columns, measure};
use super::StyledText;
use crate::style::{strip_variation_selectors, Segment, Sgr};

impl<'a> StyledText<'a> {
    /// Cut to at most `limit` columns.
    ///
    /// Style sequences and zero-width code points ride along without using
    /// budget. A double-width glyph that does not fit is dropped whole. When
    /// nothing had to be removed the source comes back untouched, open
    /// styles included; when something was removed after a style was
    /// emitted, the result ends in a reset.
    pub fn truncate(&self, limit: usize) -> String {
        if limit == 0 {
            return String::new();
        }
        // Same notion of width as `measure`, spliced sequences included
        if self.width <= limit {
            return self.source.to_string();
        }

        let mut out = String::with_capacity(self.source.len());
        let mut used = 0;
        let mut kept_style = false;
        let mut kept_visible = false;
        let mut cut = false;

        'scan: for segment in &self.segments {
            match segment {
                Segment::Style(code) => {
                    out.push_str(code);
                    kept_style = true;
                }
                Segment::Text(text) => {
                    for c in text.chars() {
                        let w = char_columns(c);
                        if w == 0 {
                            out.push(c);
                            continue;
                        }
                        if used + w > limit {
                            cut = true;
                            break 'scan;
                        }
                        out.push(c);
                        used += w;
                        kept_visible = true;
                    }
                }
            }
        }

        if !cut {
            return self.source.to_string();
        }
        if !kept_visible {
            return String::new();
        }
        if kept_style && !out.ends_with(Sgr::RESET) {
            out.push_str(Sgr::RESET);
        }
        out
    }
}

/// Cut `s` to at most `limit` columns. See [`StyledText::truncate`].
///
/// ```
/// use bankterm::truncate;
///
/// assert_eq!(truncate("hello", 3), "hel");
/// assert_eq!(truncate("\x1b[31mhello", 3), "\x1b[31mhel\x1b[0m");
/// assert_eq!(truncate("日本", 3), "日");
/// ```
pub fn truncate(s: &str, limit: usize) -> String {
    StyledText::parse(s).truncate(limit)
}

/// Fit `s` into `limit` columns, marking a cut with a dim ellipsis.
pub fn ellipsize(s: &str, limit: usize) -> String {
    if measure(s) <= limit {
        return strip_variation_selectors(s);
    }
    if limit <= 3 {
        return truncate(s, limit);
    }
    format!(
        "{}{}...{}",
        truncate(s, limit - 3),
        Sgr::DIM,
        Sgr::RESET
    )
}
