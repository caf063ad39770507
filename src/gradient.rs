// Per-character RGB gradients
//
// A gradient title is a run of single-character truecolor directives. The
// output is ordinary styled text, so it goes through measure/justify like
// anything else.

use crate::style::Sgr;
use crate::theme::Palette;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Linear interpolation toward `other`; `ratio` is clamped to [0, 1]
    /// and each channel is truncated toward zero.
    pub fn lerp(self, other: Rgb, ratio: f64) -> Rgb {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * ratio;
            v as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Foreground directive for this color
    pub fn fg(self) -> String {
        Sgr::fg_rgb(self.r, self.g, self.b)
    }
}

/// Paint each non-space character of `text` with a color interpolated
/// between `from` and `to` by its position.
///
/// Spaces are copied unstyled but still count as positions. One reset
/// closes the whole output.
///
/// ```
/// use bankterm::{gradient, measure, Rgb};
///
/// let out = gradient("ab", Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
/// assert_eq!(out, "\x1b[38;2;0;0;0ma\x1b[38;2;255;255;255mb\x1b[0m");
/// assert_eq!(measure(&out), 2);
/// ```
pub fn gradient(text: &str, from: Rgb, to: Rgb) -> String {
    let n = text.chars().count();
    let span = n.saturating_sub(1).max(1) as f64;
    let mut out = String::with_capacity(text.len() * 20 + Sgr::RESET.len());

    for (i, c) in text.chars().enumerate() {
        if c == ' ' {
            out.push(c);
            continue;
        }
        out.push_str(&from.lerp(to, i as f64 / span).fg());
        out.push(c);
    }

    out.push_str(Sgr::RESET);
    out
}

/// Title gradient using the palette's configured endpoints
pub fn gradient_title(text: &str, palette: &Palette) -> String {
    let (from, to) = palette.title_gradient;
    gradient(text, from, to)
}
