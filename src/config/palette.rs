//! Per-role palette overrides from the `[palette]` section
//!
//! Values are kept as written so the config can be serialized back; they are
//! parsed into style directives only when the palette is resolved.

use serde::Deserialize;

use crate::gradient::Rgb;
use crate::theme::{parse_style, PaletteOverrides};

/// Palette overrides as loaded from config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilePalette {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub highlight: Option<String>,
    pub text: Option<String>,
    pub subtitle: Option<String>,
    pub muted: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
    pub title_gradient: Option<Vec<String>>,
}

/// Raw palette overrides carried by [`super::Config`]
pub type PaletteConfig = FilePalette;

impl FilePalette {
    /// Role names paired with their configured value, in template order
    pub fn roles(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("primary", self.primary.as_deref()),
            ("secondary", self.secondary.as_deref()),
            ("highlight", self.highlight.as_deref()),
            ("text", self.text.as_deref()),
            ("subtitle", self.subtitle.as_deref()),
            ("muted", self.muted.as_deref()),
            ("success", self.success.as_deref()),
            ("error", self.error.as_deref()),
            ("warning", self.warning.as_deref()),
            ("info", self.info.as_deref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.title_gradient.is_none() && self.roles().iter().all(|(_, v)| v.is_none())
    }

    /// Parse every configured value. Invalid values are logged and skipped
    /// so the preset's own directive stays in place.
    pub fn overrides(&self) -> PaletteOverrides {
        fn style(role: &str, value: &Option<String>) -> Option<String> {
            let value = value.as_deref()?;
            let parsed = parse_style(value);
            if parsed.is_none() {
                tracing::warn!("Invalid palette value for {}: {:?}", role, value);
            }
            parsed
        }

        PaletteOverrides {
            primary: style("primary", &self.primary),
            secondary: style("secondary", &self.secondary),
            highlight: style("highlight", &self.highlight),
            text: style("text", &self.text),
            subtitle: style("subtitle", &self.subtitle),
            muted: style("muted", &self.muted),
            success: style("success", &self.success),
            error: style("error", &self.error),
            warning: style("warning", &self.warning),
            info: style("info", &self.info),
            title_gradient: self.title_gradient.as_deref().and_then(parse_gradient),
        }
    }
}

fn parse_gradient(stops: &[String]) -> Option<(Rgb, Rgb)> {
    let parsed = match stops {
        [from, to] => Rgb::from_hex(from).zip(Rgb::from_hex(to)),
        _ => None,
    };
    if parsed.is_none() {
        tracing::warn!(
            "Invalid title_gradient {:?}: expected two \"#rrggbb\" colors",
            stops
        );
    }
    parsed
}
