//! bankterm - terminal text layout for styled, variable-width text
//!
//! Measures, truncates, pads and frames strings that mix wide glyphs,
//! combining marks and embedded SGR escape sequences, so boxes, panels and
//! bars line up column-perfectly in a terminal.
//!
//! Pipeline:
//! - `style`: split text into style and text segments once
//! - `text`: measure → truncate → justify
//! - `gradient`: per-character truecolor titles
//! - `render`: boxes, panels, bars, column rows built on `justify`
//!
//! Ambient modules (`config`, `logging`, `theme`) back the CLI binary.

pub mod config;
pub mod gradient;
pub mod logging;
pub mod render;
pub mod style;
pub mod text;
pub mod theme;

pub use gradient::{gradient, gradient_title, Rgb};
pub use render::{
    message, render_box, render_columns, render_panel, render_progress_bar, rule, side_by_side,
    BarStyle, Block, Border, BoxStyle, Column, MessageKind, PanelStyle, Spinner,
};
pub use style::{strip_styles, Segment, Sgr};
pub use text::{ellipsize, justify, measure, truncate, Align, StyledText};
pub use theme::Palette;
