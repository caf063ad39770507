// bankterm - column-perfect terminal layout for a console banking demo
//
// Architecture:
// - Library (bankterm): style codec, visual measure/truncate/justify,
//   gradients and the box/panel/bar renderers
// - CLI (clap): one subcommand per renderer plus the dashboard demo
// - Config: env > ~/.config/bankterm/config.toml > defaults
// - Logging (tracing): stderr console, in-memory capture, optional JSON files

mod cli;
mod demo;

use anyhow::Result;
use bankterm::logging::{self, LogBuffer};
use bankterm::{message, MessageKind, Palette};
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_file = cli.config;
    let command = cli.command.unwrap_or(Commands::Demo { clear: false });

    // Config management runs before loading so a broken file can be fixed
    if let Commands::Config {
        show,
        path,
        init,
        force,
    } = command
    {
        return cli::handle_config(config_file.as_deref(), show, path, init, force);
    }

    let config = match cli::load_config(config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                message(MessageKind::Error, &format!("{:#}", e), &Palette::classic())
            );
            std::process::exit(1);
        }
    };

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let log_buffer = LogBuffer::for_config(&config.logging);
    let _file_guard = logging::init(&config.logging, &log_buffer);

    // Resolved after logging so override warnings are visible
    Palette::install(config.palette());
    tracing::debug!(
        theme = %config.theme,
        ui_width = config.ui_width,
        "Configuration loaded"
    );

    cli::run(command, &config, &log_buffer)
}
