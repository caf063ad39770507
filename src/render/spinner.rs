// Braille spinner frames
//
// The engine only produces frames; callers own the timing loop.

use crate::style::Sgr;
use crate::text::measure;
use crate::theme::Palette;

pub struct Spinner;

impl Spinner {
    pub const FRAMES: [&'static str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    pub fn frame(tick: usize) -> &'static str {
        Self::FRAMES[tick % Self::FRAMES.len()]
    }

    /// Carriage-return prefixed line for in-place redraw
    pub fn line(tick: usize, label: &str, palette: &Palette) -> String {
        format!(
            "\r{}{}{} {}...",
            palette.primary,
            Self::frame(tick),
            Sgr::RESET,
            label
        )
    }

    /// Blank out a previously drawn spinner line
    pub fn clear(label: &str) -> String {
        format!("\r{}\r", " ".repeat(measure(label) + 10))
    }
}
