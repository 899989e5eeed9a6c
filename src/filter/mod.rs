//! Catalog filtering.

pub mod engine;

pub use engine::*;
