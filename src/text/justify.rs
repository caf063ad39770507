//! Exact-width padding

use super::StyledText;
use crate::text::measure;

/// Where leftover columns go when content is narrower than its slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Content first, padding after
    #[default]
    Start,
    /// Padding first, content after
    End,
    /// Padding split floor/ceil between left and right
    Center,
}

impl std::str::FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(Self::Start),
            "end" | "right" => Ok(Self::End),
            "center" | "centre" => Ok(Self::Center),
            other => Err(format!("unknown alignment {:?} (start, end, center)", other)),
        }
    }
}

impl Align {
    /// Split `gap` columns into (left, right)
    fn split(self, gap: usize) -> (usize, usize) {
        match self {
            Self::Start => (0, gap),
            Self::End => (gap, 0),
            Self::Center => {
                let left = gap / 2;
                (left, gap - left)
            }
        }
    }
}

impl<'a> StyledText<'a> {
    /// Truncate to `width`, then pad with plain spaces to exactly `width`.
    pub fn justify(&self, width: usize, align: Align) -> String {
        let fitted = self.truncate(width);
        let gap = width.saturating_sub(measure(&fitted));
        let (left, right) = align.split(gap);

        let mut out = String::with_capacity(fitted.len() + gap);
        out.extend(std::iter::repeat(' ').take(left));
        out.push_str(&fitted);
        out.extend(std::iter::repeat(' ').take(right));
        out
    }
}

/// Fit `s` to exactly `width` columns.
///
/// ```
/// use bankterm::{justify, Align};
///
/// assert_eq!(justify("x", 4, Align::Center), " x  ");
/// assert_eq!(justify("42", 5, Align::End), "   42");
/// ```
pub fn justify(s: &str, width: usize, align: Align) -> String {
    StyledText::parse(s).justify(width, align)
}

pub fn pad_end(s: &str, width: usize) -> String {
    justify(s, width, Align::Start)
}

pub fn pad_start(s: &str, width: usize) -> String {
    justify(s, width, Align::End)
}

pub fn center(s: &str, width: usize) -> String {
    justify(s, width, Align::Center)
}
