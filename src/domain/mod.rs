//! Domain types used throughout the app.
//!
//! This module defines:
//!
//! - catalog records (`ExoplanetRecord`, `Sample`, `DiscoveryMethod`)
//! - filter inputs (`FilterSpec`, `FilterConfig`, `MethodFilter`, `MissionFilter`)
//! - chart and model-performance vocabulary (`ChartKind`, `DataKey`, `MissionModel`)

pub mod types;

pub use types::*;
