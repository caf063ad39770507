//! Bordered layout renderers
//!
//! Everything here is built on [`crate::text::justify`]: each row's content
//! is fitted to the interior width first and then wrapped in border glyphs,
//! so every line of a block has the same column width.

mod boxed;
mod columns;
mod message;
mod panel;
mod progress;
mod rule;
mod spinner;

pub use boxed::{render_box, BoxStyle, DEFAULT_BOX_WIDTH};
pub use columns::{columns_interior_width, render_columns, Column};
pub use message::{message, MessageKind};
pub use panel::{render_panel, side_by_side, PanelStyle, DEFAULT_PANEL_INTERIOR};
pub use progress::{filled_cells, render_progress_bar, BarStyle, DEFAULT_BAR_WIDTH};
pub use rule::rule;
pub use spinner::Spinner;

use crate::style::{style_sequences, Sgr};
use crate::text::{justify, Align};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Border glyph sets
// ─────────────────────────────────────────────────────────────────────────────

/// The eight glyphs that make up a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Left end of a divider row
    pub tee_left: char,
    /// Right end of a divider row
    pub tee_right: char,
}

impl Border {
    pub const DOUBLE: Border = Border {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        tee_left: '╠',
        tee_right: '╣',
    };

    pub const LIGHT: Border = Border {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        tee_left: '├',
        tee_right: '┤',
    };

    fn edge(&self, style: &str, left: char, right: char, interior: usize) -> String {
        let style = style_sequences(style);
        let mut line = String::with_capacity(style.len() + (interior + 2) * 3 + 4);
        line.push_str(&style);
        line.push(left);
        line.extend(std::iter::repeat(self.horizontal).take(interior));
        line.push(right);
        line.push_str(Sgr::RESET);
        line
    }

    pub fn top(&self, style: &str, interior: usize) -> String {
        self.edge(style, self.top_left, self.top_right, interior)
    }

    pub fn divider(&self, style: &str, interior: usize) -> String {
        self.edge(style, self.tee_left, self.tee_right, interior)
    }

    pub fn bottom(&self, style: &str, interior: usize) -> String {
        self.edge(style, self.bottom_left, self.bottom_right, interior)
    }

    /// Content row: `content` is fitted to `interior` columns, then framed
    pub fn row(&self, style: &str, content: &str, interior: usize, align: Align) -> String {
        self.framed(style, &justify(content, interior, align))
    }

    /// Frame content that is already exactly the interior width
    pub(crate) fn framed(&self, style: &str, fitted: &str) -> String {
        let style = style_sequences(style);
        format!(
            "{s}{v}{r}{fitted}{s}{v}{r}",
            s = &*style,
            v = self.vertical,
            r = Sgr::RESET,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendered block
// ─────────────────────────────────────────────────────────────────────────────

/// Lines of identical column width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            width,
        }
    }

    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Total column width of every line, borders included
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
