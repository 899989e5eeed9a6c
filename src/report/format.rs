//! Formatted terminal output: catalog table, detail card, model performance.
//!
//! We keep formatting code in one place so:
//! - the filter/classifier code stays clean and testable
//! - output changes are localized (important for snapshot-style tests)

use std::fmt;

use chrono::DateTime;

use crate::chart::ChartTemplate;
use crate::domain::{ExoplanetRecord, MissionModel, ModelPerformance};

/// Placeholder for a quantity the detection pipeline did not produce.
pub const NOT_DETECTED: &str = "Not detected";

/// Coarse bucket for a 0-1 confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// `>= 0.8` high, `>= 0.6` medium, anything else low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "✓",
            ConfidenceLevel::Medium => "~",
            ConfidenceLevel::Low => "!",
        }
    }
}

/// `"1.63 R⊕ (92%)"`, or the placeholder when the value is absent.
pub fn format_value(value: Option<f64>, unit: &str, confidence: Option<f64>) -> String {
    let Some(v) = value else {
        return NOT_DETECTED.to_string();
    };
    match confidence {
        Some(c) => format!("{v:.2} {unit} ({}%)", percent(c)),
        None => format!("{v:.2} {unit}"),
    }
}

/// Format records as a table followed by a footer (usually a `FilterSummary`).
pub fn format_catalog_table(records: &[&ExoplanetRecord], footer: impl fmt::Display) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<20} {:<22} {:<16} {:>5} {:>8} {:>8} {:>9} {:<8}",
            "id", "name", "method", "year", "radius", "mass", "dist(ly)", "mission"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<20} {:-<22} {:-<16} {:-<5} {:-<8} {:-<8} {:-<9} {:-<8}",
            "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in records {
        out.push_str(
            format!(
                "{:<20} {:<22} {:<16} {:>5} {:>8} {:>8} {:>9} {:<8}",
                truncate(&r.id, 20),
                truncate(&r.name, 22),
                truncate(r.discovery_method.label(), 16),
                r.discovery_year,
                fmt_opt(r.radius, 2),
                fmt_opt(r.mass, 2),
                fmt_opt(r.distance, 1),
                truncate(r.mission.as_deref().unwrap_or("-"), 8),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    if records.is_empty() {
        out.push_str("No exoplanets found. Try adjusting your search criteria or filters.\n");
    }
    out.push_str(&format!("\n{footer}\n"));
    out
}

/// Detail card for one record plus its chart template.
pub fn format_detail(record: &ExoplanetRecord, template: &ChartTemplate) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", record.name));
    out.push_str(&format!("id: {}\n", record.id));
    out.push_str(&format!(
        "Discovered: {} via {}\n",
        record.discovery_year, record.discovery_method
    ));
    out.push_str(&format!(
        "Host star: {}\n",
        record.host_star.as_deref().unwrap_or(NOT_DETECTED)
    ));
    if let Some(mission) = &record.mission {
        out.push_str(&format!("Mission: {mission}\n"));
    }
    if let Some(description) = &record.description {
        out.push_str(&format!("\n{description}\n"));
    }

    out.push_str("\nMeasurements:\n");
    let rows = [
        ("Radius", record.radius, "R⊕", record.radius_confidence),
        ("Mass", record.mass, "M⊕", record.mass_confidence),
        ("Distance", record.distance, "ly", record.distance_confidence),
        ("Temperature", record.temperature, "K", record.temperature_confidence),
        ("Orbital period", record.orbital_period, "days", None),
    ];
    for (label, value, unit, confidence) in rows {
        let mut line = format!("  {label:<15} {}", format_value(value, unit, confidence));
        if let (Some(_), Some(c)) = (value, confidence) {
            line.push(' ');
            line.push_str(ConfidenceLevel::from_score(c).marker());
        }
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(version) = &record.ai_model_version {
        out.push_str("\nDetection info:\n");
        out.push_str(&format!("  {:<15} {version}\n", "Model version"));
        if let Some(c) = record.detection_confidence {
            out.push_str(&format!("  {:<15} {}%\n", "Confidence", percent(c)));
        }
        if let Some(updated) = &record.last_updated {
            out.push_str(&format!("  {:<15} {}\n", "Last updated", format_timestamp(updated)));
        }
    }

    if let Some(paper) = &record.discovery_paper {
        out.push_str(&format!("\nDiscovery paper: {paper}\n"));
    }

    out.push_str(&format!("\n{}: {}\n", template.title, template.description));
    out.push_str(&format!("{}\n", template.analysis(record)));

    out
}

/// Model performance table.
pub fn format_performance(model: MissionModel, perf: &ModelPerformance) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} model performance ===\n", model.display_name()));
    out.push_str(&format!("  {:<12} {:.2}\n", "Precision", perf.precision));
    out.push_str(&format!("  {:<12} {:.2}\n", "Recall", perf.recall));
    out.push_str(&format!("  {:<12} {:.2}\n", "F1 score", perf.f1score));
    out.push_str(&format!("  {:<12} {:.0}%\n", "Performance", perf.performance));
    out
}

fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// RFC 3339 timestamps show as a date; anything else is shown verbatim.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) if v.is_finite() => format!("{v:.precision$}"),
        _ => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::classify_record;
    use crate::data::{mock_catalog, model_performance};
    use crate::filter::FilterSummary;

    #[test]
    fn confidence_levels_follow_thresholds() {
        assert_eq!(ConfidenceLevel::from_score(0.92), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.8), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.6), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.59), ConfidenceLevel::Low);
    }

    #[test]
    fn format_value_uses_placeholder_for_absent_values() {
        assert_eq!(format_value(None, "M⊕", Some(0.9)), NOT_DETECTED);
        assert_eq!(format_value(Some(1.63), "R⊕", None), "1.63 R⊕");
        assert_eq!(format_value(Some(1.63), "R⊕", Some(0.92)), "1.63 R⊕ (92%)");
        assert_eq!(format_value(Some(0.0), "R⊕", None), "0.00 R⊕", "zero is a value");
    }

    #[test]
    fn detail_card_shows_not_detected_mass_for_proxima() {
        let records = mock_catalog();
        let proxima = records.iter().find(|r| r.id == "proxima-centauri-b").unwrap();
        let txt = format_detail(proxima, &classify_record(proxima));

        assert!(txt.contains("Mass            Not detected"), "{txt}");
        assert!(txt.contains("Radius          1.17 R⊕ (85%) ✓"), "{txt}");
        assert!(txt.contains("Last updated    2024-01-15"), "{txt}");
        assert!(txt.contains("Radial Velocity Curve"), "{txt}");
    }

    #[test]
    fn catalog_table_lists_rows_and_counter() {
        let records = mock_catalog();
        let refs: Vec<&ExoplanetRecord> = records.iter().take(2).collect();
        let txt = format_catalog_table(&refs, FilterSummary { shown: 2, total: 8 });

        assert!(txt.contains("kepler-452b"));
        assert!(txt.contains("Proxima Centauri b"));
        assert!(txt.trim_end().ends_with("2 of 8 planets"));
    }

    #[test]
    fn empty_table_says_nothing_found() {
        let txt = format_catalog_table(&[], FilterSummary { shown: 0, total: 8 });
        assert!(txt.contains("No exoplanets found"));
    }

    #[test]
    fn performance_table_shows_percentage() {
        let txt = format_performance(MissionModel::Tess, &model_performance(MissionModel::Tess));
        assert!(txt.starts_with("=== TESS model performance ==="));
        assert!(txt.contains("Performance  86%"));
    }

    #[test]
    fn truncate_marks_cut_strings() {
        assert_eq!(truncate("abcdef", 4), "abc.");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
