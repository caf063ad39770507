// Palette: named style directives for every semantic role
//
// A palette is an immutable value. One process-wide table is installed at
// startup (from config) and read everywhere else; until then the classic
// preset is used.
//
// Presets:
// - classic: the 16-color ANSI look (cyan frame, green/red money)
// - ocean:   truecolor blues
// - mono:    no color at all, only bold/dim

mod parse;

pub use parse::parse_style;

use crate::gradient::Rgb;
use crate::style::Sgr;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Palette> = OnceLock::new();

/// Names accepted by [`Palette::by_name`]
pub const PRESETS: &[&str] = &["classic", "ocean", "mono"];

/// Resolved palette ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,

    // ─── Frame & text ────────────────────────────────────────
    pub primary: String,
    pub secondary: String,
    pub highlight: String,
    pub text: String,
    pub subtitle: String,
    pub muted: String,

    // ─── Status ──────────────────────────────────────────────
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,

    // ─── Gradient title endpoints ────────────────────────────
    pub title_gradient: (Rgb, Rgb),
}

/// Per-role overrides, each already parsed to a directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteOverrides {
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
    pub title_gradient: Option<(Rgb, Rgb)>,
}

const GOLD: (Rgb, Rgb) = (Rgb::new(255, 215, 0), Rgb::new(255, 140, 0));

impl Palette {
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            primary: Sgr::CYAN.to_string(),
            secondary: Sgr::MAGENTA.to_string(),
            highlight: Sgr::LIGHT_CYAN.to_string(),
            text: Sgr::WHITE.to_string(),
            subtitle: Sgr::LIGHT_BLACK.to_string(),
            muted: Sgr::DIM.to_string(),
            success: Sgr::GREEN.to_string(),
            error: Sgr::RED.to_string(),
            warning: Sgr::YELLOW.to_string(),
            info: Sgr::BLUE.to_string(),
            title_gradient: GOLD,
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "ocean".to_string(),
            primary: Sgr::fg_rgb(64, 156, 255),
            secondary: Sgr::fg_rgb(122, 162, 247),
            highlight: Sgr::fg_rgb(125, 207, 255),
            text: Sgr::fg_rgb(192, 202, 245),
            subtitle: Sgr::fg_rgb(86, 95, 137),
            muted: Sgr::DIM.to_string(),
            success: Sgr::fg_rgb(158, 206, 106),
            error: Sgr::fg_rgb(247, 118, 142),
            warning: Sgr::fg_rgb(224, 175, 104),
            info: Sgr::fg_rgb(42, 195, 222),
            title_gradient: (Rgb::new(125, 207, 255), Rgb::new(64, 92, 255)),
        }
    }

    /// No color directives; emphasis only
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            primary: String::new(),
            secondary: String::new(),
            highlight: Sgr::BOLD.to_string(),
            text: String::new(),
            subtitle: Sgr::DIM.to_string(),
            muted: Sgr::DIM.to_string(),
            success: String::new(),
            error: Sgr::BOLD.to_string(),
            warning: String::new(),
            info: String::new(),
            title_gradient: (Rgb::new(255, 255, 255), Rgb::new(160, 160, 160)),
        }
    }

    /// Look up a preset (case-insensitive, spaces and dashes ignored)
    pub fn by_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "classic" | "default" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            "mono" | "monochrome" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Preset by name, falling back to classic for unknown names
    pub fn resolve(name: &str, overrides: &PaletteOverrides) -> Self {
        let base = Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, using classic", name);
            Self::classic()
        });
        base.with_overrides(overrides)
    }

    pub fn with_overrides(mut self, overrides: &PaletteOverrides) -> Self {
        fn apply(slot: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        }

        apply(&mut self.primary, &overrides.primary);
        apply(&mut self.secondary, &overrides.secondary);
        apply(&mut self.highlight, &overrides.highlight);
        apply(&mut self.text, &overrides.text);
        apply(&mut self.subtitle, &overrides.subtitle);
        apply(&mut self.muted, &overrides.muted);
        apply(&mut self.success, &overrides.success);
        apply(&mut self.error, &overrides.error);
        apply(&mut self.warning, &overrides.warning);
        apply(&mut self.info, &overrides.info);
        if let Some(gradient) = overrides.title_gradient {
            self.title_gradient = gradient;
        }
        self
    }

    /// Install the process-wide palette. Only the first call wins; returns
    /// `false` if a palette was already installed.
    pub fn install(palette: Palette) -> bool {
        let name = palette.name.clone();
        let installed = GLOBAL.set(palette).is_ok();
        if installed {
            tracing::debug!("Palette installed: {}", name);
        }
        installed
    }

    /// The process-wide palette (classic until one is installed)
    pub fn global() -> &'static Palette {
        GLOBAL.get_or_init(Palette::classic)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_presets() {
        for name in PRESETS {
            assert_eq!(Palette::by_name(name).map(|p| p.name), Some(name.to_string()));
        }
        assert_eq!(Palette::by_name("Mono-Chrome").map(|p| p.name), Some("mono".into()));
        assert!(Palette::by_name("neon").is_none());
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let palette = Palette::resolve("neon", &PaletteOverrides::default());
        assert_eq!(palette, Palette::classic());
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = PaletteOverrides {
            primary: Some("\x1b[1;35m".to_string()),
            title_gradient: Some((Rgb::new(0, 0, 0), Rgb::new(1, 1, 1))),
            ..Default::default()
        };
        let palette = Palette::classic().with_overrides(&overrides);
        assert_eq!(palette.primary, "\x1b[1;35m");
        assert_eq!(palette.success, Sgr::GREEN);
        assert_eq!(palette.title_gradient.1, Rgb::new(1, 1, 1));
    }

    #[test]
    fn test_classic_matches_sgr_constants() {
        let palette = Palette::classic();
        assert_eq!(palette.primary, Sgr::CYAN);
        assert_eq!(palette.muted, Sgr::DIM);
        assert_eq!(palette.title_gradient, GOLD);
    }

    #[test]
    fn test_global_is_stable() {
        let first = Palette::global() as *const Palette;
        let second = Palette::global() as *const Palette;
        assert_eq!(first, second);
    }
}
