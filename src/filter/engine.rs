//! Multi-predicate catalog filter.
//!
//! A record survives when every predicate passes:
//!
//! - text search over name / host star / discovery method (case-insensitive)
//! - inclusive discovery-year range
//! - exact discovery method (unless `all`)
//! - inclusive radius range (missing radius handled per `MissingValuePolicy`)
//! - case-insensitive mission (unless `all`; missing mission fails)
//!
//! The filter is stable: survivors keep their input order.

use std::fmt;

use tracing::debug;

use crate::domain::{
    ExoplanetRecord, FilterConfig, FilterSpec, MethodFilter, MissingValuePolicy, MissionFilter,
};

/// Filter engine bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl FilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The spec a fresh view starts with (and `reset` returns to).
    pub fn default_spec(&self) -> FilterSpec {
        FilterSpec {
            search: String::new(),
            year_range: self.config.year_bounds,
            discovery_method: MethodFilter::All,
            size_range: self.config.size_bounds,
            mission: MissionFilter::All,
        }
    }

    /// Restore `spec` to the configured defaults.
    pub fn reset(&self, spec: &mut FilterSpec) {
        *spec = self.default_spec();
    }

    /// Whether a single record passes every predicate.
    pub fn matches(&self, record: &ExoplanetRecord, spec: &FilterSpec) -> bool {
        search_matches(record, &spec.search)
            && spec.year_range.contains(record.discovery_year)
            && method_matches(record, &spec.discovery_method)
            && self.size_matches(record, spec)
            && mission_matches(record, &spec.mission)
    }

    /// Stable filter: the result is a subsequence of `records`.
    pub fn filter<'a>(&self, records: &'a [ExoplanetRecord], spec: &FilterSpec) -> Vec<&'a ExoplanetRecord> {
        let out: Vec<&ExoplanetRecord> = records.iter().filter(|r| self.matches(r, spec)).collect();
        debug!(total = records.len(), shown = out.len(), "filtered catalog");
        out
    }

    fn size_matches(&self, record: &ExoplanetRecord, spec: &FilterSpec) -> bool {
        match record.radius {
            Some(radius) => spec.size_range.contains(radius),
            None => self.config.missing_radius == MissingValuePolicy::Include,
        }
    }
}

/// Filter with the default configuration.
pub fn filter_records<'a>(records: &'a [ExoplanetRecord], spec: &FilterSpec) -> Vec<&'a ExoplanetRecord> {
    FilterEngine::default().filter(records, spec)
}

/// Predicate check with the default configuration.
pub fn matches(record: &ExoplanetRecord, spec: &FilterSpec) -> bool {
    FilterEngine::default().matches(record, spec)
}

/// The text-search predicate on its own (empty search matches everything).
pub fn search_matches(record: &ExoplanetRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record
            .host_star
            .as_deref()
            .is_some_and(|host| host.to_lowercase().contains(&needle))
        || record.discovery_method.label().to_lowercase().contains(&needle)
}

fn method_matches(record: &ExoplanetRecord, filter: &MethodFilter) -> bool {
    match filter {
        MethodFilter::All => true,
        MethodFilter::Only(method) => record.discovery_method.label() == method.label(),
    }
}

fn mission_matches(record: &ExoplanetRecord, filter: &MissionFilter) -> bool {
    match filter {
        MissionFilter::All => true,
        MissionFilter::Named(wanted) => record
            .mission
            .as_deref()
            .is_some_and(|mission| mission.to_lowercase() == wanted.to_lowercase()),
    }
}

/// The "N of M planets" counter shown next to the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} planets", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_catalog;
    use crate::domain::{DiscoveryMethod, RangeBound};

    fn kepler_452b() -> ExoplanetRecord {
        let mut r = ExoplanetRecord::new("kepler-452b", "Kepler-452b", DiscoveryMethod::Transit, 2015);
        r.radius = Some(1.63);
        r.host_star = Some("Kepler-452".to_string());
        r
    }

    fn default_spec() -> FilterSpec {
        FilterEngine::default().default_spec()
    }

    fn owned(refs: Vec<&ExoplanetRecord>) -> Vec<ExoplanetRecord> {
        refs.into_iter().cloned().collect()
    }

    #[test]
    fn default_spec_keeps_everything_with_a_radius_in_order() {
        let mut records = mock_catalog();
        let mut no_radius = ExoplanetRecord::new("ghost", "Ghost", DiscoveryMethod::Microlensing, 2010);
        no_radius.radius = None;
        records.insert(2, no_radius);

        let kept = owned(filter_records(&records, &default_spec()));
        let expected: Vec<ExoplanetRecord> = records.iter().filter(|r| r.radius.is_some()).cloned().collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn missing_radius_included_when_policy_says_so() {
        let record = ExoplanetRecord::new("ghost", "Ghost", DiscoveryMethod::Microlensing, 2010);
        let engine = FilterEngine::new(FilterConfig {
            missing_radius: MissingValuePolicy::Include,
            ..FilterConfig::default()
        });
        assert!(engine.matches(&record, &engine.default_spec()));
        assert!(!matches(&record, &default_spec()));
    }

    #[test]
    fn result_is_a_subsequence_and_idempotent() {
        let records = mock_catalog();
        let mut spec = default_spec();
        spec.search = "e".to_string();
        spec.size_range = RangeBound::new(1.0, 2.0);

        let once = owned(filter_records(&records, &spec));
        let twice = owned(filter_records(&once, &spec));
        assert_eq!(once, twice);

        // Subsequence: walking the input finds each survivor in order.
        let mut it = records.iter();
        for kept in &once {
            assert!(it.any(|r| r == kept), "{} out of order or duplicated", kept.id);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = mock_catalog();
        let mut upper = default_spec();
        upper.search = "KEPLER".to_string();
        let mut lower = default_spec();
        lower.search = "kepler".to_string();

        let a = filter_records(&records, &upper);
        let b = filter_records(&records, &lower);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn search_checks_host_star_and_method() {
        let record = kepler_452b();
        let mut spec = default_spec();

        spec.search = "452".to_string();
        assert!(matches(&record, &spec));

        spec.search = "TRANSIT".to_string();
        assert!(matches(&record, &spec), "method label should be searchable");

        let mut hostless = record.clone();
        hostless.name = "Nameless".to_string();
        hostless.host_star = None;
        spec.search = "kepler".to_string();
        assert!(!matches(&hostless, &spec));
    }

    #[test]
    fn search_mismatch_excludes_kepler_452b() {
        let mut spec = default_spec();
        spec.search = "proxima".to_string();
        assert!(!matches(&kepler_452b(), &spec));
    }

    #[test]
    fn year_below_range_excludes_kepler_452b() {
        let mut spec = default_spec();
        spec.year_range = RangeBound::new(2016, 2024);
        assert!(!matches(&kepler_452b(), &spec));

        spec.year_range = RangeBound::new(2015, 2015);
        assert!(matches(&kepler_452b(), &spec));
    }

    #[test]
    fn method_mismatch_excludes_kepler_452b() {
        let mut spec = default_spec();
        spec.discovery_method = MethodFilter::Only(DiscoveryMethod::RadialVelocity);
        assert!(!matches(&kepler_452b(), &spec));

        spec.discovery_method = MethodFilter::Only(DiscoveryMethod::Transit);
        assert!(matches(&kepler_452b(), &spec));
    }

    #[test]
    fn size_range_is_inclusive() {
        let mut spec = default_spec();
        spec.size_range = RangeBound::new(1.63, 1.63);
        assert!(matches(&kepler_452b(), &spec));

        spec.size_range = RangeBound::new(1.64, 10.0);
        assert!(!matches(&kepler_452b(), &spec));
    }

    #[test]
    fn mission_matches_case_insensitively_and_requires_presence() {
        let mut record = kepler_452b();
        let mut spec = default_spec();
        spec.mission = MissionFilter::Named("TESS".to_string());

        assert!(!matches(&record, &spec), "absent mission must fail a named filter");

        record.mission = Some("tess".to_string());
        assert!(matches(&record, &spec));

        record.mission = Some("Kepler".to_string());
        assert!(!matches(&record, &spec));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let records = mock_catalog();
        let mut spec = default_spec();
        spec.year_range = RangeBound::new(2024, 1995);
        assert!(filter_records(&records, &spec).is_empty());
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let engine = FilterEngine::new(FilterConfig {
            year_bounds: RangeBound::new(1990, 2030),
            ..FilterConfig::default()
        });
        let mut spec = engine.default_spec();
        spec.search = "wasp".to_string();
        spec.mission = MissionFilter::Named("Kepler".to_string());
        spec.year_range = RangeBound::new(2000, 2001);

        engine.reset(&mut spec);
        assert_eq!(spec, engine.default_spec());
        assert_eq!(spec.year_range, RangeBound::new(1990, 2030));

        let plain = FilterEngine::default().default_spec();
        assert_eq!(plain.year_range, RangeBound::new(1995, 2024));
        assert_eq!(plain.size_range, RangeBound::new(0.0, 10.0));
        assert!(plain.search.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_records(&[], &default_spec()).is_empty());
    }

    #[test]
    fn summary_reads_like_the_badge() {
        let s = FilterSummary { shown: 3, total: 8 };
        assert_eq!(s.to_string(), "3 of 8 planets");
    }
}
