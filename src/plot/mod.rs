//! Terminal plots for the CLI.

pub mod ascii;

pub use ascii::*;
