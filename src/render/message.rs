// One-line status messages

use crate::style::{strip_variation_selectors, Sgr};
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
    Highlight,
}

impl MessageKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Highlight => "👉",
        }
    }

    fn style(&self, palette: &Palette) -> String {
        match self {
            Self::Success => palette.success.clone(),
            Self::Error => palette.error.clone(),
            Self::Warning => palette.warning.clone(),
            Self::Info => palette.info.clone(),
            Self::Highlight => format!("{}{}", palette.highlight, Sgr::BOLD),
        }
    }
}

/// `{style}{icon} {text}{reset}`
pub fn message(kind: MessageKind, text: &str, palette: &Palette) -> String {
    format!(
        "{}{} {}{}",
        kind.style(palette),
        strip_variation_selectors(kind.icon()),
        text,
        Sgr::RESET
    )
}
