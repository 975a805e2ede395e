//! logview CLI - browse deployment log trees in the browser
//!
//! Usage: logview [COMMAND]
//!
//! Commands:
//!   serve   Serve the log viewer over HTTP (default)
//!   tree    Print the status tree of a log directory
//!   render  Convert one log file's ANSI colors to HTML

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use logview::presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let mut config = commands::load_config(cli.config.as_deref(), &cwd)?;

    let command = cli.command.unwrap_or(Commands::Serve {
        root: None,
        port: None,
        bind: None,
        open: false,
    });

    match command {
        Commands::Serve {
            root,
            port,
            bind,
            open,
        } => {
            if let Some(root) = root {
                config.logs.root = root;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if open {
                config.server.open_browser = true;
            }
            commands::cmd_serve(&config)
        }
        Commands::Tree { root, json } => {
            if let Some(root) = root {
                config.logs.root = root;
            }
            commands::cmd_tree(&config, json)
        }
        Commands::Render { file, escape_html } => commands::cmd_render(&config, &file, escape_html),
    }
}

/// Warnings by default; each `-v` adds a level. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
