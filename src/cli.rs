//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for folio using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive gallery TUI (default)
//! - **list**: Print items matching the given filters
//! - **tags**: Print the tag census
//! - **show**: Print one item's full detail
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--file` flag overriding the configured data file
//! - Command aliases (e.g., `b` for `browse`, `l` for `list`)

use crate::gallery::SortKey;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "A terminal portfolio gallery browser"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the portfolio data file (overrides the configured one)
    #[arg(short = 'f', long = "file", global = true)]
    pub data_file: Option<PathBuf>,

    /// Suppress informational output (results only)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the gallery interactively (default)
    #[command(visible_alias = "b")]
    Browse,

    /// List items matching the given filters
    #[command(visible_alias = "l")]
    List(ListArgs),

    /// Print every tag with its item count
    #[command(visible_alias = "t")]
    Tags,

    /// Show the full detail for one item
    Show {
        /// Item id
        id: String,
    },
}

/// Filter, sort, and paging flags for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Require a tag (repeatable; every given tag must match)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Free-text filter over title, role, tools, and tags
    /// (long-only; `-q` is the global quiet flag)
    #[arg(long = "query")]
    pub query: Option<String>,

    /// Lower year bound (inclusive)
    #[arg(long)]
    pub from: Option<i32>,

    /// Upper year bound (inclusive)
    #[arg(long)]
    pub until: Option<i32>,

    /// Result ordering
    #[arg(long, value_enum, default_value_t = SortArg::Newest)]
    pub sort: SortArg,

    /// Page to print
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page (overrides the configured page size)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,
}

/// Sort order as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Descending by year
    Newest,
    /// Ascending by year
    Oldest,
    /// Ascending by title
    TitleAsc,
    /// Descending by title
    TitleDesc,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => Self::Newest,
            SortArg::Oldest => Self::Oldest,
            SortArg::TitleAsc => Self::TitleAsc,
            SortArg::TitleDesc => Self::TitleDesc,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command to run, defaulting to browse
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
