//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - deserialized straight from the catalog backend (plain JSON records)
//! - filtered and classified in-memory
//! - exported back to JSON/CSV

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How an exoplanet was discovered.
///
/// The five named techniques are the ones the catalog knows about. Backends
/// occasionally emit other labels (e.g. `"Transit (ML)"`); those are kept
/// verbatim in `Other` rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscoveryMethod {
    Transit,
    RadialVelocity,
    DirectImaging,
    Microlensing,
    Astrometry,
    Other(String),
}

impl DiscoveryMethod {
    pub const ALL: [DiscoveryMethod; 5] = [
        DiscoveryMethod::Transit,
        DiscoveryMethod::RadialVelocity,
        DiscoveryMethod::DirectImaging,
        DiscoveryMethod::Microlensing,
        DiscoveryMethod::Astrometry,
    ];

    /// The wire/display label (`"Radial Velocity"`, ...).
    pub fn label(&self) -> &str {
        match self {
            DiscoveryMethod::Transit => "Transit",
            DiscoveryMethod::RadialVelocity => "Radial Velocity",
            DiscoveryMethod::DirectImaging => "Direct Imaging",
            DiscoveryMethod::Microlensing => "Microlensing",
            DiscoveryMethod::Astrometry => "Astrometry",
            DiscoveryMethod::Other(label) => label,
        }
    }

    /// Exact (case-sensitive) label lookup; unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .iter()
            .find(|m| m.label() == label)
            .cloned()
            .unwrap_or_else(|| DiscoveryMethod::Other(label.to_string()))
    }
}

impl From<String> for DiscoveryMethod {
    fn from(value: String) -> Self {
        DiscoveryMethod::from_label(&value)
    }
}

impl From<DiscoveryMethod> for String {
    fn from(value: DiscoveryMethod) -> Self {
        match value {
            DiscoveryMethod::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One time-series measurement.
///
/// A sample carries either a `brightness` (transit photometry) or a
/// `velocity` (radial velocity); nothing stops a backend from sending both
/// or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
}

impl Sample {
    pub fn brightness(time: f64, value: f64) -> Self {
        Self {
            time,
            brightness: Some(value),
            velocity: None,
        }
    }

    pub fn velocity(time: f64, value: f64) -> Self {
        Self {
            time,
            brightness: None,
            velocity: Some(value),
        }
    }

    pub fn value(&self, key: DataKey) -> Option<f64> {
        match key {
            DataKey::Brightness => self.brightness,
            DataKey::Velocity => self.velocity,
        }
    }
}

/// A single exoplanet as served by the catalog.
///
/// Every physical quantity is optional: `None` means "not detected", which is
/// not the same thing as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetRecord {
    pub id: String,
    pub name: String,
    pub discovery_method: DiscoveryMethod,
    pub discovery_year: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    /// Earth radii.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Earth masses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Light years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<f64>,
    /// Kelvin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_star: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_data: Option<Vec<Sample>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ExoplanetRecord {
    /// A record with only the always-present fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        discovery_method: DiscoveryMethod,
        discovery_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            discovery_method,
            discovery_year,
            mission: None,
            radius: None,
            mass: None,
            distance: None,
            orbital_period: None,
            temperature: None,
            host_star: None,
            radius_confidence: None,
            mass_confidence: None,
            distance_confidence: None,
            temperature_confidence: None,
            graph_data: None,
            description: None,
            discovery_paper: None,
            ai_model_version: None,
            detection_confidence: None,
            last_updated: None,
        }
    }

    /// The time series, with an absent array treated as empty.
    pub fn samples(&self) -> &[Sample] {
        self.graph_data.as_deref().unwrap_or(&[])
    }
}

/// Inclusive `[min, max]` bound.
///
/// Ordering (`min <= max`) is the caller's job; an inverted range simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeBound<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Discovery-method constraint: the `"all"` sentinel or one exact method.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MethodFilter {
    #[default]
    All,
    Only(DiscoveryMethod),
}

impl MethodFilter {
    /// Choices offered by front-ends, in display order.
    pub fn options() -> Vec<MethodFilter> {
        std::iter::once(MethodFilter::All)
            .chain(DiscoveryMethod::ALL.into_iter().map(MethodFilter::Only))
            .collect()
    }
}

impl FromStr for MethodFilter {
    type Err = String;

    /// Accepts `all`, an exact label (`"Radial Velocity"`), or a kebab-case
    /// alias (`radial-velocity`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == ALL_SENTINEL {
            return Ok(MethodFilter::All);
        }
        DiscoveryMethod::ALL
            .into_iter()
            .find(|m| m.label() == trimmed || m.label().to_lowercase().replace(' ', "-") == trimmed)
            .map(MethodFilter::Only)
            .ok_or_else(|| {
                let labels: Vec<&str> = DiscoveryMethod::ALL.iter().map(|m| m.label()).collect();
                format!(
                    "unknown discovery method '{trimmed}' (expected 'all' or one of: {})",
                    labels.join(", ")
                )
            })
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::All => f.write_str(ALL_SENTINEL),
            MethodFilter::Only(method) => f.write_str(method.label()),
        }
    }
}

/// Mission constraint: the `"all"` sentinel or a case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissionFilter {
    #[default]
    All,
    Named(String),
}

impl MissionFilter {
    /// Missions offered by front-ends, in display order.
    pub fn options() -> Vec<MissionFilter> {
        vec![
            MissionFilter::All,
            MissionFilter::Named("Kepler".to_string()),
            MissionFilter::Named("TESS".to_string()),
        ]
    }
}

impl FromStr for MissionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("mission must not be empty (use 'all' for no constraint)".to_string());
        }
        if trimmed == ALL_SENTINEL {
            Ok(MissionFilter::All)
        } else {
            Ok(MissionFilter::Named(trimmed.to_string()))
        }
    }
}

impl fmt::Display for MissionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionFilter::All => f.write_str(ALL_SENTINEL),
            MissionFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Sentinel meaning "no constraint" for categorical filters.
pub const ALL_SENTINEL: &str = "all";

/// The active constraints a viewer has chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub search: String,
    pub year_range: RangeBound<i32>,
    pub discovery_method: MethodFilter,
    /// Bound on `radius` (Earth radii).
    pub size_range: RangeBound<f64>,
    pub mission: MissionFilter,
}

/// What the size predicate does with a record whose radius was not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// Absent radius fails the size predicate.
    #[default]
    Exclude,
    /// Absent radius passes the size predicate.
    Include,
}

/// Engine configuration injected at construction.
///
/// The defaults reproduce the catalog's historical slider bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub year_bounds: RangeBound<i32>,
    pub size_bounds: RangeBound<f64>,
    pub missing_radius: MissingValuePolicy,
}

pub const DEFAULT_YEAR_BOUNDS: RangeBound<i32> = RangeBound { min: 1995, max: 2024 };
pub const DEFAULT_SIZE_BOUNDS: RangeBound<f64> = RangeBound { min: 0.0, max: 10.0 };

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            year_bounds: DEFAULT_YEAR_BOUNDS,
            size_bounds: DEFAULT_SIZE_BOUNDS,
            missing_radius: MissingValuePolicy::Exclude,
        }
    }
}

/// Which chart template a time series maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Transit,
    RadialVelocity,
    Generic,
}

/// The sample field plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKey {
    Brightness,
    Velocity,
}

impl DataKey {
    pub fn as_str(self) -> &'static str {
        match self {
            DataKey::Brightness => "brightness",
            DataKey::Velocity => "velocity",
        }
    }
}

/// Detection models with published performance figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissionModel {
    Kepler,
    Tess,
}

impl MissionModel {
    pub const ALL: [MissionModel; 2] = [MissionModel::Kepler, MissionModel::Tess];

    pub fn display_name(self) -> &'static str {
        match self {
            MissionModel::Kepler => "Kepler",
            MissionModel::Tess => "TESS",
        }
    }

    pub fn next(self) -> Self {
        match self {
            MissionModel::Kepler => MissionModel::Tess,
            MissionModel::Tess => MissionModel::Kepler,
        }
    }
}

/// Classification metrics for one detection model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub precision: f64,
    pub recall: f64,
    pub f1score: f64,
    /// Percentage (0-100).
    pub performance: f64,
}
