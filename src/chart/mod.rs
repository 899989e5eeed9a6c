//! Chart template selection for a record's time series.
//!
//! The classifier looks at which sample fields are present and picks one of
//! three fixed templates, in priority order:
//!
//! 1. any `brightness` → transit light curve
//! 2. any `velocity`   → radial-velocity curve
//! 3. otherwise        → generic "discovery data"
//!
//! Mixed arrays therefore resolve to the transit template. `consistency`
//! reports such arrays so callers can surface them.

use crate::domain::{ChartKind, DataKey, ExoplanetRecord, Sample};

/// Everything a front-end needs to draw one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTemplate {
    pub kind: ChartKind,
    pub title: &'static str,
    pub description: &'static str,
    pub data_key: DataKey,
    pub y_label: &'static str,
    pub x_label: &'static str,
    /// Hex RGB, e.g. `#4FC3F7`.
    pub color: &'static str,
    pub icon: &'static str,
}

pub const TRANSIT: ChartTemplate = ChartTemplate {
    kind: ChartKind::Transit,
    title: "Transit Light Curve",
    description: "Brightness dip during planetary transit",
    data_key: DataKey::Brightness,
    y_label: "Relative Brightness",
    x_label: "Time (hours)",
    color: "#4FC3F7",
    icon: "trending-down",
};

pub const RADIAL_VELOCITY: ChartTemplate = ChartTemplate {
    kind: ChartKind::RadialVelocity,
    title: "Radial Velocity Curve",
    description: "Star's velocity variation due to planetary orbit",
    data_key: DataKey::Velocity,
    y_label: "Radial Velocity (m/s)",
    x_label: "Time (days)",
    color: "#BB86FC",
    icon: "activity",
};

pub const GENERIC: ChartTemplate = ChartTemplate {
    kind: ChartKind::Generic,
    title: "Discovery Data",
    description: "Scientific measurement data",
    data_key: DataKey::Brightness,
    y_label: "Signal",
    x_label: "Time",
    color: "#4FC3F7",
    icon: "activity",
};

impl ChartTemplate {
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Transit => TRANSIT,
            ChartKind::RadialVelocity => RADIAL_VELOCITY,
            ChartKind::Generic => GENERIC,
        }
    }

    /// `color` as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_rgb(self.color).unwrap_or((255, 255, 255))
    }

    /// One-line caption shown under the chart.
    pub fn analysis(&self, record: &ExoplanetRecord) -> String {
        format!(
            "This {} shows the scientific evidence used to discover {} through the {} method in {}.",
            self.title.to_lowercase(),
            record.name,
            record.discovery_method,
            record.discovery_year
        )
    }
}

/// Pick the chart template for a series.
pub fn classify(samples: &[Sample]) -> ChartTemplate {
    if samples.iter().any(|s| s.brightness.is_some()) {
        TRANSIT
    } else if samples.iter().any(|s| s.velocity.is_some()) {
        RADIAL_VELOCITY
    } else {
        GENERIC
    }
}

/// Classify a record's `graph_data` (absent counts as empty).
pub fn classify_record(record: &ExoplanetRecord) -> ChartTemplate {
    classify(record.samples())
}

/// Plot points for `key`, skipping samples that don't carry it.
pub fn series(samples: &[Sample], key: DataKey) -> Vec<(f64, f64)> {
    samples
        .iter()
        .filter_map(|s| s.value(key).map(|v| (s.time, v)))
        .collect()
}

/// Whether a series agrees on which field it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesConsistency {
    /// No sample carries brightness or velocity.
    Empty,
    /// Every valued sample carries the same field.
    Uniform(DataKey),
    /// Both fields appear; counts are samples carrying each.
    Mixed { brightness: usize, velocity: usize },
}

pub fn consistency(samples: &[Sample]) -> SeriesConsistency {
    let brightness = samples.iter().filter(|s| s.brightness.is_some()).count();
    let velocity = samples.iter().filter(|s| s.velocity.is_some()).count();
    match (brightness, velocity) {
        (0, 0) => SeriesConsistency::Empty,
        (_, 0) => SeriesConsistency::Uniform(DataKey::Brightness),
        (0, _) => SeriesConsistency::Uniform(DataKey::Velocity),
        _ => SeriesConsistency::Mixed { brightness, velocity },
    }
}

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
