//! Command-line parsing for the exoplanet catalog explorer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the filtering/classification code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{MethodFilter, MissionFilter, MissionModel};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "exo", version, about = "Exoplanet catalog explorer")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Where records come from.
    #[arg(long, global = true, value_enum, default_value_t = SourceKind::Mock)]
    pub source: SourceKind,

    /// Records JSON file (required with `--source file`).
    #[arg(long, global = true, value_name = "JSON")]
    pub file: Option<PathBuf>,

    /// Backend base URL (overrides EXO_API_BASE_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log level for this crate (RUST_LOG takes precedence when set).
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Mock,
    Api,
    File,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the filtered catalog.
    List(ListArgs),
    /// Show one planet: facts, chart template and an ASCII plot of its data.
    Show(ShowArgs),
    /// Search by name, host star or discovery method.
    Search(SearchArgs),
    /// Print detection model performance.
    Perf(PerfArgs),
    /// Launch the interactive TUI.
    Tui,
}

/// Filter options for `exo list`.
///
/// Range bounds left unset fall back to the configured defaults.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Case-insensitive substring of name, host star or method.
    #[arg(short = 's', long, default_value = "")]
    pub search: String,

    /// Earliest discovery year (inclusive).
    #[arg(long)]
    pub year_min: Option<i32>,

    /// Latest discovery year (inclusive).
    #[arg(long)]
    pub year_max: Option<i32>,

    /// Discovery method ("all", "Transit", "radial-velocity", ...).
    #[arg(short = 'm', long, default_value = "all")]
    pub method: MethodFilter,

    /// Minimum radius in Earth radii (inclusive).
    #[arg(long)]
    pub size_min: Option<f64>,

    /// Maximum radius in Earth radii (inclusive).
    #[arg(long)]
    pub size_max: Option<f64>,

    /// Mission ("all", "Kepler", "TESS", ...), matched case-insensitively.
    #[arg(long, default_value = "all")]
    pub mission: MissionFilter,

    /// Export the filtered records (CSV when the path ends in .csv, JSON otherwise).
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Record id, e.g. `kepler-452b`.
    pub id: String,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Skip the ASCII plot.
    #[arg(long)]
    pub no_plot: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,
}

#[derive(Debug, Parser, Clone)]
pub struct PerfArgs {
    /// Only show one model.
    #[arg(long, value_enum)]
    pub model: Option<MissionModel>,

    /// Skip the ROC and precision-recall plots.
    #[arg(long)]
    pub no_plot: bool,
}
