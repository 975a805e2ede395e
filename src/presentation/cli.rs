//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --verbose) are inherited by all subcommands
//! - Running without a subcommand serves the log root from config

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// logview - browse deployment log trees with status colors
#[derive(Parser, Debug)]
#[command(name = "logview")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'logview' without arguments to serve ./logs on port 8000.")]
pub struct Cli {
    /// Configuration file (defaults to ./logview.toml, then ~/.config/logview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the log viewer over HTTP
    Serve {
        /// Log directory to browse
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        bind: Option<String>,

        /// Open the viewer in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Print the status tree of a log directory
    Tree {
        /// Log directory to walk
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Emit JSON instead of a colored tree
        #[arg(long)]
        json: bool,
    },

    /// Convert one log file's ANSI colors to HTML on stdout
    Render {
        /// Log file to convert
        file: PathBuf,

        /// Escape HTML characters in the log text
        #[arg(long)]
        escape_html: bool,
    },
}
