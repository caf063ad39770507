// Panel composer: small light-frame blocks meant to sit side by side
//
// Every line of a panel has the same width, so a row of panels can be built
// by zipping their lines.

use super::{Block, Border};
use crate::style::{strip_variation_selectors, Sgr};
use crate::text::Align;
use crate::theme::Palette;

/// Default panel interior width
pub const DEFAULT_PANEL_INTERIOR: usize = 32;

/// Panel appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    /// Interior width (borders add two columns)
    pub interior: usize,
    pub icon: String,
    pub border_style: String,
}

impl PanelStyle {
    pub fn new(palette: &Palette) -> Self {
        Self {
            interior: DEFAULT_PANEL_INTERIOR,
            icon: "📊".to_string(),
            border_style: palette.primary.clone(),
        }
    }

    pub fn interior(mut self, interior: usize) -> Self {
        self.interior = interior;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = style.into();
        self
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::new(Palette::global())
    }
}

/// Render a panel. Items are rendered in order; an empty item is a blank
/// row so that panels with the same item count line up.
pub fn render_panel<S: AsRef<str>>(title: &str, items: &[S], style: &PanelStyle) -> Block {
    let interior = style.interior;
    let border = Border::LIGHT;
    let frame = style.border_style.as_str();

    let icon = strip_variation_selectors(&style.icon);
    let title_line = if icon.is_empty() {
        format!(" {}{}{} ", Sgr::BOLD, title, Sgr::RESET)
    } else {
        format!(" {}{} {}{} ", Sgr::BOLD, icon, title, Sgr::RESET)
    };

    let mut block = Block::new(interior + 2);
    block.push(border.top(frame, interior));
    block.push(border.row(frame, &title_line, interior, Align::Start));
    block.push(border.divider(frame, interior));

    for item in items {
        let content = format!(" {}", strip_variation_selectors(item.as_ref()));
        block.push(border.row(frame, &content, interior, Align::Start));
    }

    block.push(border.bottom(frame, interior));
    block
}

/// Place blocks next to each other, `gap` spaces before and between them.
///
/// Shorter blocks are filled with blank lines of their own width, so every
/// output line has the same column width.
pub fn side_by_side(blocks: &[Block], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    let spacer = " ".repeat(gap);

    (0..height)
        .map(|row| {
            let mut line = spacer.clone();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    line.push_str(&spacer);
                }
                match block.lines().get(row) {
                    Some(text) => line.push_str(text),
                    None => line.push_str(&" ".repeat(block.width())),
                }
            }
            line
        })
        .collect()
}
