// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - demo (default): print the showcase dashboard
// - box / panel / bar / gradient: render one element from arguments
// - justify: fit a string to an exact width
// - measure: report bytes, chars and columns of a string
// - config --show | --path | --init: configuration management
//
// `--config PATH` replaces ~/.config/bankterm/config.toml for every command.

use anyhow::{bail, Context, Result};
use bankterm::config::{Config, VERSION};
use bankterm::logging::LogBuffer;
use bankterm::text::metrics;
use bankterm::{
    gradient, gradient_title, justify, message, render_box, render_panel, render_progress_bar,
    Align, BarStyle, BoxStyle, MessageKind, PanelStyle, Palette, Rgb,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// bankterm - column-perfect boxes, panels and bars for styled terminal text
#[derive(Parser, Debug)]
#[command(name = "bankterm")]
#[command(version = VERSION)]
#[command(about = "Column-perfect terminal layout for styled text", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/bankterm/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the showcase dashboard (default)
    Demo {
        /// Clear the screen first
        #[arg(long)]
        clear: bool,
    },

    /// Render a double-bordered box
    Box {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "🏦")]
        icon: String,

        /// Total width, borders included (default: ui_width)
        #[arg(long)]
        width: Option<usize>,

        /// Content lines; empty ones are skipped
        lines: Vec<String>,
    },

    /// Render a light-bordered panel
    Panel {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "📊")]
        icon: String,

        /// Interior width (default: panel_width)
        #[arg(long)]
        width: Option<usize>,

        items: Vec<String>,
    },

    /// Render a progress bar for VALUE out of MAX
    #[command(allow_negative_numbers = true)]
    Bar {
        value: f64,
        max: f64,

        /// Cell count (default: bar_width)
        #[arg(long)]
        width: Option<usize>,
    },

    /// Fit TEXT to exactly WIDTH columns
    Justify {
        text: String,

        width: usize,

        /// start, end or center
        #[arg(long, default_value = "start")]
        align: Align,

        /// Interpret \e, \x1b and \033 as ESC
        #[arg(long)]
        escapes: bool,
    },

    /// Report the byte, char and column counts of TEXT
    Measure {
        text: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Interpret \e, \x1b and \033 as ESC
        #[arg(long)]
        escapes: bool,
    },

    /// Paint TEXT with a per-character RGB gradient
    Gradient {
        text: String,

        /// Start color as #rrggbb (default: palette title gradient)
        #[arg(long)]
        from: Option<String>,

        /// End color as #rrggbb
        #[arg(long)]
        to: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Display effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write the default config template
        #[arg(long)]
        init: bool,

        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Run a rendering command with the loaded config
pub fn run(command: Commands, config: &Config, logs: &LogBuffer) -> Result<()> {
    let palette = Palette::global();

    match command {
        Commands::Demo { clear } => crate::demo::run(config, logs, clear)?,
        Commands::Box {
            title,
            icon,
            width,
            lines,
        } => {
            let style = BoxStyle::default()
                .width(width.unwrap_or(config.ui_width))
                .icon(icon);
            println!("{}", render_box(&title, &lines, &style));
        }
        Commands::Panel {
            title,
            icon,
            width,
            items,
        } => {
            let style = PanelStyle::default()
                .interior(width.unwrap_or(config.panel_width))
                .icon(icon);
            println!("{}", render_panel(&title, &items, &style));
        }
        Commands::Bar { value, max, width } => {
            let width = width.unwrap_or(config.bar_width);
            println!(
                "{}",
                render_progress_bar(value, max, width, &BarStyle::default())
            );
        }
        Commands::Justify {
            text,
            width,
            align,
            escapes,
        } => {
            let text = if escapes { unescape(&text) } else { text };
            println!("{}", justify(&text, width, align));
        }
        Commands::Measure {
            text,
            json,
            escapes,
        } => {
            let text = if escapes { unescape(&text) } else { text };
            println!("{}", measure_report(&text, json)?);
        }
        Commands::Gradient { text, from, to } => {
            let painted = match (from, to) {
                (None, None) => gradient_title(&text, palette),
                (from, to) => {
                    let (default_from, default_to) = palette.title_gradient;
                    let from = parse_color(from.as_deref(), default_from)?;
                    let to = parse_color(to.as_deref(), default_to)?;
                    gradient(&text, from, to)
                }
            };
            println!("{}", painted);
        }
        Commands::Config {
            show,
            path,
            init,
            force,
        } => handle_config(None, show, path, init, force)?,
    }

    Ok(())
}

fn parse_color(value: Option<&str>, default: Rgb) -> Result<Rgb> {
    match value {
        None => Ok(default),
        Some(hex) => match Rgb::from_hex(hex) {
            Some(color) => Ok(color),
            None => bail!("Invalid color {:?}: expected #rrggbb", hex),
        },
    }
}

fn measure_report(text: &str, json: bool) -> Result<String> {
    let m = metrics(text);
    if json {
        return serde_json::to_string(&m).context("Failed to encode metrics");
    }
    Ok(format!(
        "bytes    {}\nchars    {}\ncolumns  {}",
        m.bytes, m.chars, m.columns
    ))
}

/// Replace `\e`, `\x1b` and `\033` with a real ESC character
pub fn unescape(text: &str) -> String {
    text.replace("\\x1b", "\x1b")
        .replace("\\x1B", "\x1b")
        .replace("\\033", "\x1b")
        .replace("\\e", "\x1b")
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommand
// ─────────────────────────────────────────────────────────────────────────────

/// Load from `path` when given, otherwise from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Handle `config`. Runs before the config is loaded so a broken file can
/// still be inspected or regenerated.
pub fn handle_config(
    file: Option<&Path>,
    show: bool,
    path: bool,
    init: bool,
    force: bool,
) -> Result<()> {
    if path {
        handle_config_path(file)
    } else if init {
        handle_config_init(file, force)
    } else if show {
        handle_config_show(file)
    } else {
        println!("Usage: bankterm config [--show|--path|--init [--force]]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --init    Write the default config template");
        Ok(())
    }
}

fn config_path(file: Option<&Path>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path().context("Could not determine config path"),
    }
}

fn handle_config_path(file: Option<&Path>) -> Result<()> {
    println!("{}", config_path(file)?.display());
    Ok(())
}

fn handle_config_init(file: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(file)?;
    let palette = Palette::global();

    if Config::write_template(&path, force)? {
        println!(
            "{}",
            message(
                MessageKind::Success,
                &format!("Config written to {}", path.display()),
                palette
            )
        );
    } else {
        println!(
            "{}",
            message(
                MessageKind::Warning,
                &format!("{} already exists (use --force to overwrite)", path.display()),
                palette
            )
        );
    }
    Ok(())
}

fn handle_config_show(file: Option<&Path>) -> Result<()> {
    let config = load_config(file)?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    let source = match file {
        Some(path) => Some(path.to_path_buf()),
        None => Config::config_path(),
    };
    if let Some(path) = source {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["bankterm"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_box_arguments() {
        let cli = Cli::try_parse_from([
            "bankterm", "box", "--title", "Extrato", "--width", "40", "linha 1", "linha 2",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Box {
                title: "Extrato".to_string(),
                icon: "🏦".to_string(),
                width: Some(40),
                lines: vec!["linha 1".to_string(), "linha 2".to_string()],
            })
        );
    }

    #[test]
    fn test_bar_accepts_negative_value() {
        let cli = Cli::try_parse_from(["bankterm", "bar", "-5", "100"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Bar {
                value: -5.0,
                max: 100.0,
                width: None
            })
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["bankterm", "bar", "1", "2", "--config", "/tmp/b.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/b.toml")));

        let cli = Cli::try_parse_from(["bankterm", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_justify_arguments() {
        let cli =
            Cli::try_parse_from(["bankterm", "justify", "ok", "6", "--align", "center"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Justify {
                text: "ok".to_string(),
                width: 6,
                align: Align::Center,
                escapes: false,
            })
        );
        assert!(Cli::try_parse_from(["bankterm", "justify", "ok", "6", "--align", "up"]).is_err());
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, "panel_width = 40\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().panel_width, 40);

        std::fs::write(&path, "panel_width = \"wide\"\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_config_path_prefers_explicit_file() {
        let path = Path::new("/etc/bankterm.toml");
        assert_eq!(config_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn test_force_requires_init() {
        assert!(Cli::try_parse_from(["bankterm", "config", "--force"]).is_err());
        assert!(Cli::try_parse_from(["bankterm", "config", "--init", "--force"]).is_ok());
    }

    #[test]
    fn test_unescape_variants() {
        assert_eq!(unescape(r"\e[31mx\x1b[0m\033[1m"), "\x1b[31mx\x1b[0m\x1b[1m");
        assert_eq!(unescape("plain"), "plain");
    }

    #[test]
    fn test_measure_report_json() {
        let report = measure_report("日本", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["bytes"], 6);
        assert_eq!(value["chars"], 2);
        assert_eq!(value["columns"], 4);
    }

    #[test]
    fn test_measure_report_ignores_styles() {
        let report = measure_report("\x1b[1mab\x1b[0m", false).unwrap();
        assert!(report.ends_with("columns  2"), "{}", report);
    }

    #[test]
    fn test_parse_color() {
        let fallback = Rgb::new(1, 2, 3);
        assert_eq!(parse_color(None, fallback).unwrap(), fallback);
        assert_eq!(parse_color(Some("#ff0000"), fallback).unwrap(), Rgb::new(255, 0, 0));
        assert!(parse_color(Some("red"), fallback).is_err());
    }
}
