//! CLI argument parser
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Command-line argument parser for `focuslist`.
#[derive(Debug, Parser)]
#[command(name = "focuslist")]
#[command(
    about = "A scrollable, fuzzy-filterable list for the terminal",
    long_about = "focuslist - pick an item from a list in the terminal.

Items are read from FILE, or from stdin when no file is given. Files ending
in .toml hold [[items]] tables; anything else is read as tab separated lines:
title<TAB>description<TAB>option,option,...

Examples:
 ls | focuslist pick                 # pick a file name
 focuslist pick fruits.toml -H 4 -i  # 4 items per page, wraparound on
 focuslist filter ap fruits.txt      # print fuzzy matches with scores
 focuslist render fruits.txt -f 3    # print one frame focused on item 3

Use `focuslist <COMMAND> --help` for more details."
)]
pub struct Args {
    /// Config file (default: $CONFIG_DIR/focuslist/config.toml if present)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that override the config file.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Number of items visible at once
    #[arg(long, short = 'H', value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Wrap around when moving past either end
    #[arg(long, short)]
    pub infinite: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Pick an item interactively",
        long_about = "Open the interactive list. The title of the picked item is
printed to stdout; nothing is printed if the list is left with Esc or C-c.",
        alias = "p"
    )]
    Pick {
        /// Items file (default: stdin)
        file: Option<PathBuf>,

        /// Initial filter pattern
        #[arg(long, short)]
        filter: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    #[command(
        about = "Print the items matching a pattern",
        long_about = "Fuzzy-match PATTERN against every title and print the
matches, best first, one `score<TAB>title` per line.",
        alias = "f"
    )]
    Filter {
        pattern: String,

        /// Items file (default: stdin)
        file: Option<PathBuf>,
    },

    #[command(
        about = "Print a single rendered frame",
        long_about = "Render the list once, with the window scrolled so the
focused item is visible, and print it to stdout.",
        alias = "r"
    )]
    Render {
        /// Items file (default: stdin)
        file: Option<PathBuf>,

        /// Position to focus
        #[arg(long, short = 'f', default_value_t = 0)]
        focus: usize,

        /// Filter pattern applied before rendering
        #[arg(long, short = 'p')]
        pattern: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
