//! Environment-driven configuration.
//!
//! Values are read from the process environment after loading an optional
//! `.env` file. CLI flags override them (see `app`).
//!
//! | variable                 | default                  |
//! |--------------------------|--------------------------|
//! | `EXO_API_BASE_URL`       | `http://localhost:8000`  |
//! | `EXO_REQUEST_TIMEOUT_MS` | `10000`                  |
//! | `EXO_YEAR_MIN`           | `1995`                   |
//! | `EXO_YEAR_MAX`           | `2024`                   |
//! | `EXO_SIZE_MIN`           | `0`                      |
//! | `EXO_SIZE_MAX`           | `10`                     |
//! | `EXO_MISSING_RADIUS`     | `exclude`                |

use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;

use crate::data::api::DEFAULT_TIMEOUT;
use crate::domain::{FilterConfig, MissingValuePolicy, RangeBound, DEFAULT_SIZE_BOUNDS, DEFAULT_YEAR_BOUNDS};
use crate::error::AppError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where and how to reach the catalog backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub filter: FilterConfig,
}

impl AppConfig {
    /// Load `.env` (if any) and read `EXO_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("EXO_API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout = parse_var::<u64, _>(&lookup, "EXO_REQUEST_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        let year_bounds = RangeBound::new(
            parse_var(&lookup, "EXO_YEAR_MIN")?.unwrap_or(DEFAULT_YEAR_BOUNDS.min),
            parse_var(&lookup, "EXO_YEAR_MAX")?.unwrap_or(DEFAULT_YEAR_BOUNDS.max),
        );
        if year_bounds.min > year_bounds.max {
            return Err(AppError::usage(format!(
                "EXO_YEAR_MIN ({}) must not exceed EXO_YEAR_MAX ({}).",
                year_bounds.min, year_bounds.max
            )));
        }

        let size_bounds = RangeBound::new(
            parse_var(&lookup, "EXO_SIZE_MIN")?.unwrap_or(DEFAULT_SIZE_BOUNDS.min),
            parse_var(&lookup, "EXO_SIZE_MAX")?.unwrap_or(DEFAULT_SIZE_BOUNDS.max),
        );
        if !(size_bounds.min <= size_bounds.max) {
            return Err(AppError::usage(format!(
                "EXO_SIZE_MIN ({}) must not exceed EXO_SIZE_MAX ({}).",
                size_bounds.min, size_bounds.max
            )));
        }

        let missing_radius = match lookup("EXO_MISSING_RADIUS") {
            None => MissingValuePolicy::default(),
            Some(raw) => <MissingValuePolicy as ValueEnum>::from_str(raw.trim(), true).map_err(|_| {
                AppError::usage(format!(
                    "Invalid EXO_MISSING_RADIUS '{raw}' (expected 'exclude' or 'include')."
                ))
            })?,
        };

        Ok(Self {
            api: ApiConfig { base_url, timeout },
            filter: FilterConfig {
                year_bounds,
                size_bounds,
                missing_radius,
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::usage(format!("Invalid {key} '{raw}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.filter.year_bounds, RangeBound::new(1995, 2024));
        assert_eq!(cfg.api.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("EXO_API_BASE_URL", "http://api.test"),
            ("EXO_REQUEST_TIMEOUT_MS", "2500"),
            ("EXO_YEAR_MIN", "1990"),
            ("EXO_SIZE_MAX", "25"),
            ("EXO_MISSING_RADIUS", "Include"),
        ]))
        .unwrap();
        assert_eq!(cfg.api.base_url, "http://api.test");
        assert_eq!(cfg.api.timeout, Duration::from_millis(2500));
        assert_eq!(cfg.filter.year_bounds, RangeBound::new(1990, 2024));
        assert_eq!(cfg.filter.size_bounds, RangeBound::new(0.0, 25.0));
        assert_eq!(cfg.filter.missing_radius, MissingValuePolicy::Include);
    }

    #[test]
    fn bad_values_are_usage_errors() {
        let err = AppConfig::from_lookup(lookup_from(&[("EXO_YEAR_MAX", "soon")])).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.message().contains("EXO_YEAR_MAX"));

        let err = AppConfig::from_lookup(lookup_from(&[("EXO_SIZE_MIN", "11")])).unwrap_err();
        assert!(err.message().contains("must not exceed"));

        assert!(AppConfig::from_lookup(lookup_from(&[("EXO_MISSING_RADIUS", "maybe")])).is_err());
    }
}
