// Box composer: double-line frame with a centered title
//
// ╔════════════╗
// ║  🏦 TITLE  ║
// ╠════════════╣
// ║ content    ║
// ╚════════════╝

use super::{Block, Border};
use crate::style::{segments, strip_variation_selectors, Segment, Sgr};
use crate::text::{Align, StyledText};
use crate::theme::Palette;

/// Default total box width
pub const DEFAULT_BOX_WIDTH: usize = 70;

/// Box appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxStyle {
    /// Total width including both border columns
    pub width: usize,
    pub icon: String,
    pub title_style: String,
    pub border_style: String,
}

impl BoxStyle {
    pub fn new(palette: &Palette) -> Self {
        Self {
            width: DEFAULT_BOX_WIDTH,
            icon: "🏦".to_string(),
            title_style: palette.primary.clone(),
            border_style: palette.primary.clone(),
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn title_style(mut self, style: impl Into<String>) -> Self {
        self.title_style = style.into();
        self
    }

    pub fn border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = style.into();
        self
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::new(Palette::global())
    }
}

/// Upper-case the text segments, leaving style sequences untouched
fn upper_text(title: &str) -> String {
    segments(title)
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.to_uppercase(),
            Segment::Style(seq) => seq.to_string(),
        })
        .collect()
}

/// Title text as it appears inside the title row
fn title_line(title: &str, icon: &str, title_style: &str) -> String {
    let icon = strip_variation_selectors(icon);
    let title = upper_text(title);
    let label = if icon.is_empty() {
        title
    } else {
        format!("{} {}", icon, title)
    };
    format!(" {}{}{}{} ", title_style, Sgr::BOLD, label, Sgr::RESET)
}

/// Render a closed box. Empty content lines are skipped.
pub fn render_box<S: AsRef<str>>(title: &str, lines: &[S], style: &BoxStyle) -> Block {
    let width = style.width.max(2);
    let interior = width - 2;
    let border = Border::DOUBLE;
    let frame = style.border_style.as_str();

    let mut block = Block::new(width);
    block.push(border.top(frame, interior));
    block.push(border.row(
        frame,
        &title_line(title, &style.icon, &style.title_style),
        interior,
        Align::Center,
    ));
    block.push(border.divider(frame, interior));

    for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.is_empty()) {
        let content = format!(" {} ", strip_variation_selectors(line));
        let text = StyledText::parse(&content);
        if text.width() > interior {
            tracing::trace!(
                "Box row truncated from {} to {} columns",
                text.width(),
                interior
            );
        }
        block.push(border.framed(frame, &text.justify(interior, Align::Start)));
    }

    block.push(border.bottom(frame, interior));
    block
}
