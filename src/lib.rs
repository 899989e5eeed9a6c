//! `exo-atlas` library crate.
//!
//! The binary (`exo`) is a thin wrapper around this library so that:
//!
//! - the filter engine and chart classifier are testable without spawning processes
//! - the CLI and the TUI share one catalog pipeline

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
