// Style value parser for palette overrides
//
// Accepted forms:
// - Hex:            "#RRGGBB"          -> truecolor foreground
// - SGR parameters: "1;36", "38;5;208" -> used verbatim
// - Names:          "cyan", "light_red", "bg_blue", "bold", "dim", ...
// - Empty string:   no styling

use crate::gradient::Rgb;
use crate::style::Sgr;

/// Parse a style value into a directive string.
///
/// Returns `None` for values that match none of the accepted forms.
pub fn parse_style(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(String::new());
    }

    if value.starts_with('#') {
        return Rgb::from_hex(value).map(Rgb::fg);
    }

    if value.bytes().all(|b| b.is_ascii_digit() || b == b';') {
        return Sgr::from_params(value);
    }

    named(value).map(str::to_string)
}

fn named(name: &str) -> Option<&'static str> {
    let code = match name.to_lowercase().replace(['-', ' '], "_").as_str() {
        "bold" => Sgr::BOLD,
        "dim" => Sgr::DIM,
        "italic" => Sgr::ITALIC,
        "underline" => Sgr::UNDERLINE,
        "reverse" => Sgr::REVERSE,
        "black" => Sgr::BLACK,
        "red" => Sgr::RED,
        "green" => Sgr::GREEN,
        "yellow" => Sgr::YELLOW,
        "blue" => Sgr::BLUE,
        "magenta" | "purple" => Sgr::MAGENTA,
        "cyan" => Sgr::CYAN,
        "white" => Sgr::WHITE,
        "light_black" | "gray" | "grey" => Sgr::LIGHT_BLACK,
        "light_red" => Sgr::LIGHT_RED,
        "light_green" => Sgr::LIGHT_GREEN,
        "light_yellow" => Sgr::LIGHT_YELLOW,
        "light_blue" => Sgr::LIGHT_BLUE,
        "light_magenta" => Sgr::LIGHT_MAGENTA,
        "light_cyan" => Sgr::LIGHT_CYAN,
        "light_white" => Sgr::LIGHT_WHITE,
        "bg_black" => Sgr::BG_BLACK,
        "bg_red" => Sgr::BG_RED,
        "bg_green" => Sgr::BG_GREEN,
        "bg_yellow" => Sgr::BG_YELLOW,
        "bg_blue" => Sgr::BG_BLUE,
        "bg_magenta" => Sgr::BG_MAGENTA,
        "bg_cyan" => Sgr::BG_CYAN,
        "bg_white" => Sgr::BG_WHITE,
        _ => return None,
    };
    Some(code)
}
