//! Reporting utilities: formatted terminal output for the catalog,
//! record details and model performance.

pub mod format;

pub use format::*;
