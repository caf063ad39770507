//! Visual text primitives: measure, truncate, justify
//!
//! Every higher-level renderer goes through [`justify`], which is what keeps
//! borders aligned regardless of glyph width or embedded styling.
//!
//! - `measure`: column width of styled text
//! - `truncate`: width-bounded cut that never splits a sequence or a glyph
//! - `justify`: truncate, then pad to an exact width

mod justify;
mod measure;
mod truncate;

pub use justify::{center, justify, pad_end, pad_start, Align};
pub use measure::{char_columns, measure, metrics, Metrics};
pub use truncate::{ellipsize, truncate};

use crate::style::{segments, Segment};

/// A string parsed once into style and text segments.
#[derive(Debug, Clone)]
pub struct StyledText<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
    width: usize,
}

impl<'a> StyledText<'a> {
    pub fn parse(source: &'a str) -> Self {
        Self {
            source,
            segments: segments(source),
            width: measure(source),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.source
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Rendered column width
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_text_parse() {
        let text = StyledText::parse("\x1b[36m║\x1b[0m");
        assert_eq!(text.width(), 1);
        assert_eq!(text.segments().len(), 3);
        assert!(text.segments()[0].is_style());
        assert_eq!(text.segments()[1], Segment::Text("║"));
    }

    #[test]
    fn test_styled_text_plain_input() {
        let text = StyledText::parse("plain");
        assert_eq!(text.segments(), &[Segment::Text("plain")]);
        assert_eq!(text.as_str(), "plain");
        assert_eq!(text.width(), 5);
    }
}
