//! Input/output helpers.
//!
//! - record JSON read/write (`records`)
//! - filtered-catalog exports (CSV/JSON) (`export`)

pub mod export;
pub mod records;

pub use export::*;
pub use records::*;
