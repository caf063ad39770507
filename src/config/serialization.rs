//! Config serialization to TOML format
//!
//! `to_toml()` is the single source of truth for the config file layout:
//! `config --init` writes it and `config --show` prints it.

use super::logging::level_name;
use super::Config;

/// Quote a value as a TOML basic string
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    fn palette_to_toml(&self) -> String {
        let mut output = String::new();
        for (role, value) in self.palette.roles() {
            match value {
                Some(value) => output.push_str(&format!("{} = {}\n", role, quoted(value))),
                None => output.push_str(&format!("# {} = \"\"\n", role)),
            }
        }

        match &self.palette.title_gradient {
            Some(stops) => {
                let stops: Vec<String> = stops.iter().map(|s| quoted(s)).collect();
                output.push_str(&format!("title_gradient = [{}]\n", stops.join(", ")));
            }
            None => output.push_str("# title_gradient = [\"#ffd700\", \"#ff8c00\"]\n"),
        }

        output
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r##"# bankterm configuration
# Precedence: environment > this file > built-in defaults

# ─────────────────────────────────────────────────────────────────────────────
# LAYOUT
# ─────────────────────────────────────────────────────────────────────────────

# Palette preset: classic, ocean, mono (env: BANKTERM_THEME)
theme = {theme}

# Total box width in columns, borders included (env: BANKTERM_WIDTH, min 10)
ui_width = {ui_width}

# Panel interior width in columns (env: BANKTERM_PANEL_WIDTH, min 8)
panel_width = {panel_width}

# Progress bar cells (min 1)
bar_width = {bar_width}

# ─────────────────────────────────────────────────────────────────────────────
# PALETTE OVERRIDES
# ─────────────────────────────────────────────────────────────────────────────
# Each role takes SGR parameters ("1;36"), a truecolor hex ("#33ccff"),
# a color name ("light_cyan", "bg_blue", "bold") or "" for no style.

[palette]
{palette_section}
# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG, when set, replaces both levels.
# Levels: off, error, warn, info, debug, trace

[logging]
# Captured entries (dashboard log panel) and the log file
level = {log_level}
# stderr, which shares the terminal with rendered output
console_level = {log_console_level}
# Captured entries kept in memory (min 1)
capture_capacity = {log_capture_capacity}

[logging.file]
enabled = {log_file_enabled}
dir = {log_file_dir}
# Rotation: hourly, daily, never
rotation = "{log_file_rotation}"
prefix = {log_file_prefix}
"##,
            theme = quoted(&self.theme),
            ui_width = self.ui_width,
            panel_width = self.panel_width,
            bar_width = self.bar_width,
            palette_section = self.palette_to_toml(),
            log_level = quoted(level_name(self.logging.level)),
            log_console_level = quoted(level_name(self.logging.console_level)),
            log_capture_capacity = self.logging.capture_capacity,
            log_file_enabled = self.logging.file.enabled,
            log_file_dir = quoted(&self.logging.file.dir.display().to_string()),
            log_file_rotation = self.logging.file.rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file.prefix),
        )
    }
}
