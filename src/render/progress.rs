// Progress bar: filled cells then empty cells, each run in its own style

use crate::style::{style_sequences, Sgr};
use crate::theme::Palette;

/// Default bar width in cells
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Bar appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarStyle {
    pub fill: String,
    pub muted: String,
    pub full_glyph: char,
    pub empty_glyph: char,
}

impl BarStyle {
    pub fn new(palette: &Palette) -> Self {
        Self {
            fill: palette.success.clone(),
            muted: palette.muted.clone(),
            full_glyph: '█',
            empty_glyph: '░',
        }
    }

    pub fn fill(mut self, style: impl Into<String>) -> Self {
        self.fill = style.into();
        self
    }

    pub fn muted(mut self, style: impl Into<String>) -> Self {
        self.muted = style.into();
        self
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::new(Palette::global())
    }
}

/// Number of filled cells for `value` out of `max` on a bar of `width`.
///
/// `round(value / max * width)` clamped to `[0, width]`; a non-positive (or
/// NaN) `max` and a NaN ratio both give 0.
pub fn filled_cells(value: f64, max: f64, width: usize) -> usize {
    if max.is_nan() || max <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round();
    if cells.is_nan() {
        return 0;
    }
    cells.clamp(0.0, width as f64) as usize
}

/// Render a bar of exactly `width` cells.
///
/// ```
/// use bankterm::{render_progress_bar, measure, BarStyle};
///
/// let bar = render_progress_bar(5.0, 10.0, 4, &BarStyle::default());
/// assert_eq!(measure(&bar), 4);
/// assert_eq!(bar.matches('█').count(), 2);
/// ```
pub fn render_progress_bar(value: f64, max: f64, width: usize, style: &BarStyle) -> String {
    let filled = filled_cells(value, max, width);
    let empty = width - filled;

    let mut bar = String::with_capacity(width * 3 + 16);
    bar.push_str(&style_sequences(&style.fill));
    bar.extend(std::iter::repeat(style.full_glyph).take(filled));
    bar.push_str(Sgr::RESET);
    bar.push_str(&style_sequences(&style.muted));
    bar.extend(std::iter::repeat(style.empty_glyph).take(empty));
    bar.push_str(Sgr::RESET);
    bar
}
