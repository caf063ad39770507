//! Style codec: recognizes SGR escape sequences embedded in text.
//!
//! A styling sequence is `ESC [` followed by a run of digits and semicolons
//! and terminated by `m`. Sequences are atomic zero-width units: the codec
//! splits a string once into [`Segment`]s so that nothing downstream has to
//! re-scan for escapes. Anything that looks like the start of a sequence but
//! never terminates is ordinary text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// The emoji presentation selector. Zero width, and stripped by composers
/// because terminals disagree on whether it widens the preceding glyph.
pub const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Leftmost-first matcher used to split whole strings.
static SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"));

/// Anchored matcher used for point detection.
static SGR_ANCHORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x1b\[[0-9;]*m").expect("SGR pattern is valid"));

// ─────────────────────────────────────────────────────────────────────────────
// Named directives
// ─────────────────────────────────────────────────────────────────────────────

/// Named SGR directives.
pub struct Sgr;

impl Sgr {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const ITALIC: &'static str = "\x1b[3m";
    pub const UNDERLINE: &'static str = "\x1b[4m";
    pub const BLINK: &'static str = "\x1b[5m";
    pub const REVERSE: &'static str = "\x1b[7m";
    pub const STRIKE: &'static str = "\x1b[9m";

    pub const BLACK: &'static str = "\x1b[30m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const WHITE: &'static str = "\x1b[37m";

    pub const LIGHT_BLACK: &'static str = "\x1b[90m";
    pub const LIGHT_RED: &'static str = "\x1b[91m";
    pub const LIGHT_GREEN: &'static str = "\x1b[92m";
    pub const LIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const LIGHT_BLUE: &'static str = "\x1b[94m";
    pub const LIGHT_MAGENTA: &'static str = "\x1b[95m";
    pub const LIGHT_CYAN: &'static str = "\x1b[96m";
    pub const LIGHT_WHITE: &'static str = "\x1b[97m";

    pub const BG_BLACK: &'static str = "\x1b[40m";
    pub const BG_RED: &'static str = "\x1b[41m";
    pub const BG_GREEN: &'static str = "\x1b[42m";
    pub const BG_YELLOW: &'static str = "\x1b[43m";
    pub const BG_BLUE: &'static str = "\x1b[44m";
    pub const BG_MAGENTA: &'static str = "\x1b[45m";
    pub const BG_CYAN: &'static str = "\x1b[46m";
    pub const BG_WHITE: &'static str = "\x1b[47m";

    /// 24-bit foreground directive
    pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// 24-bit background directive
    pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[48;2;{};{};{}m", r, g, b)
    }

    /// Build a directive from raw SGR parameters such as `"1;36"`.
    ///
    /// Returns `None` unless the parameters are digits and semicolons only,
    /// so the result is always a sequence the codec recognizes.
    pub fn from_params(params: &str) -> Option<String> {
        if params.bytes().all(|b| b.is_ascii_digit() || b == b';') {
            Some(format!("\x1b[{}m", params))
        } else {
            None
        }
    }
}

/// Wrap `text` in `style` and terminate with a reset.
pub fn paint(style: &str, text: &str) -> String {
    format!("{}{}{}", style, text, Sgr::RESET)
}

/// Foreground 24-bit color applied to a whole string.
pub fn rgb(r: u8, g: u8, b: u8, text: &str) -> String {
    paint(&Sgr::fg_rgb(r, g, b), text)
}

/// Background 24-bit color applied to a whole string.
pub fn bg_rgb(r: u8, g: u8, b: u8, text: &str) -> String {
    paint(&Sgr::bg_rgb(r, g, b), text)
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection and segmentation
// ─────────────────────────────────────────────────────────────────────────────

/// Byte length of the style sequence starting at byte `pos`, if any.
///
/// `pos` past the end or inside a multi-byte char is simply "no sequence".
pub fn sequence_at(s: &str, pos: usize) -> Option<usize> {
    let rest = s.get(pos..)?;
    SGR_ANCHORED.find(rest).map(|m| m.end())
}

/// One run of a parsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Visible (or zero-width) text, never containing a complete sequence
    Text(&'a str),
    /// A complete style directive, copied verbatim
    Style(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Style(s) => s,
        }
    }

    pub fn is_style(&self) -> bool {
        matches!(self, Segment::Style(_))
    }
}

/// Split `s` into alternating text and style runs.
///
/// Concatenating the segments reproduces `s` exactly.
pub fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for m in SGR.find_iter(s) {
        if m.start() > last {
            out.push(Segment::Text(&s[last..m.start()]));
        }
        out.push(Segment::Style(m.as_str()));
        last = m.end();
    }

    if last < s.len() {
        out.push(Segment::Text(&s[last..]));
    }

    out
}

/// `true` if `s` contains at least one complete style sequence.
pub fn has_styles(s: &str) -> bool {
    SGR.is_match(s)
}

/// Keep only the complete style sequences of `s`, in order.
///
/// Styles printed outside a justified cell (borders, bar runs, rules) go
/// through this so that stray text in them can never shift a column.
pub fn style_sequences(s: &str) -> Cow<'_, str> {
    let parts = segments(s);
    if parts.iter().all(Segment::is_style) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        parts
            .iter()
            .filter(|part| part.is_style())
            .map(Segment::as_str)
            .collect(),
    )
}

/// Remove only the variation selector.
pub fn strip_variation_selectors(s: &str) -> String {
    s.replace(VARIATION_SELECTOR, "")
}

/// Remove every style sequence and variation selector.
///
/// Removal repeats until a fixed point: deleting one sequence can splice its
/// neighbours into a new complete sequence, and the result must never
/// contain one.
pub fn strip_styles(s: &str) -> String {
    let mut current = strip_variation_selectors(s);
    loop {
        let next = SGR.replace_all(&current, "");
        if next.len() == current.len() {
            return current;
        }
        current = strip_variation_selectors(&next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_at_detects_reset() {
        let s = "ab\x1b[0mcd";
        assert_eq!(sequence_at(s, 2), Some(4));
        assert_eq!(sequence_at(s, 0), None);
    }

    #[test]
    fn test_sequence_at_truecolor() {
        let s = "\x1b[38;2;255;215;0mX";
        assert_eq!(sequence_at(s, 0), Some(s.len() - 1));
    }

    #[test]
    fn test_sequence_at_out_of_range() {
        assert_eq!(sequence_at("abc", 10), None);
        // Inside a multi-byte char
        assert_eq!(sequence_at("日", 1), None);
    }

    #[test]
    fn test_unterminated_sequence_is_text() {
        let s = "ok\x1b[31";
        assert_eq!(sequence_at(s, 2), None);
        assert_eq!(segments(s), vec![Segment::Text("ok\x1b[31")]);
        assert_eq!(strip_styles(s), s);
    }

    #[test]
    fn test_segments_reassemble() {
        let s = "\x1b[1mBold\x1b[0m plain \x1b[36m日本\x1b[0m";
        let segs = segments(s);
        let joined: String = segs.iter().map(|seg| seg.as_str()).collect();
        assert_eq!(joined, s);
        assert_eq!(segs.iter().filter(|seg| seg.is_style()).count(), 4);
    }

    #[test]
    fn test_segments_adjacent_styles() {
        let s = "\x1b[1m\x1b[31mX";
        assert_eq!(
            segments(s),
            vec![
                Segment::Style("\x1b[1m"),
                Segment::Style("\x1b[31m"),
                Segment::Text("X"),
            ]
        );
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_strip_styles_removes_variation_selector() {
        assert_eq!(strip_styles("\x1b[32m✅\u{FE0F} ok\x1b[0m"), "✅ ok");
    }

    #[test]
    fn test_strip_styles_reaches_fixed_point() {
        // Removing the inner reset splices "\x1b[3" and "1m" together
        let s = "\x1b[3\x1b[0m1mX";
        let stripped = strip_styles(s);
        assert_eq!(stripped, "X");
        assert!(!has_styles(&stripped));
    }

    #[test]
    fn test_style_sequences_drops_text() {
        assert!(matches!(style_sequences("\x1b[1;36m"), Cow::Borrowed(_)));
        assert_eq!(style_sequences(""), "");
        assert_eq!(style_sequences("x\x1b[1mY\x1b[36m"), "\x1b[1m\x1b[36m");
        assert_eq!(style_sequences("\x1b[3"), "");
    }

    #[test]
    fn test_from_params_rejects_garbage() {
        assert_eq!(Sgr::from_params("1;36").as_deref(), Some("\x1b[1;36m"));
        assert_eq!(Sgr::from_params("36m"), None);
    }

    #[test]
    fn test_rgb_wraps_with_reset() {
        assert_eq!(rgb(1, 2, 3, "x"), "\x1b[38;2;1;2;3mx\x1b[0m");
        assert_eq!(bg_rgb(1, 2, 3, "x"), "\x1b[48;2;1;2;3mx\x1b[0m");
    }
}
