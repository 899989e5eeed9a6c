//! Shared catalog workflow used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core flow:
//! source -> catalog load -> filter -> (on selection) classify -> series
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use tracing::{debug, warn};

use crate::chart::{ChartTemplate, SeriesConsistency, classify, consistency, series};
use crate::config::AppConfig;
use crate::data::{CatalogSource, ExoplanetClient};
use crate::domain::{ExoplanetRecord, FilterSpec};
use crate::error::AppError;
use crate::filter::{FilterEngine, FilterSummary, search_matches};

/// Which backend to read, before it has been resolved against the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    Mock,
    Api,
    File(std::path::PathBuf),
}

/// Build the catalog source for a choice.
pub fn build_source(choice: SourceChoice, config: &AppConfig) -> Result<CatalogSource, AppError> {
    Ok(match choice {
        SourceChoice::Mock => CatalogSource::Mock,
        SourceChoice::Api => CatalogSource::Api(ExoplanetClient::new(&config.api)?),
        SourceChoice::File(path) => CatalogSource::File(path),
    })
}

/// Records that passed the filter, plus the counter.
pub fn filter_catalog<'a>(
    engine: &FilterEngine,
    records: &'a [ExoplanetRecord],
    spec: &FilterSpec,
) -> (Vec<&'a ExoplanetRecord>, FilterSummary) {
    let shown = engine.filter(records, spec);
    let summary = FilterSummary {
        shown: shown.len(),
        total: records.len(),
    };
    (shown, summary)
}

/// Search the catalog.
///
/// The API source searches server-side; the other sources apply the text
/// predicate of the filter engine with every other predicate left open. A
/// blank query returns nothing, same as the API client.
pub fn search_catalog(source: &CatalogSource, query: &str) -> Result<Vec<ExoplanetRecord>, AppError> {
    if let CatalogSource::Api(client) = source {
        return client.search(query);
    }
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records = source.load_all()?;
    Ok(records.into_iter().filter(|r| search_matches(r, query)).collect())
}

/// Everything needed to draw one record's chart.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub template: ChartTemplate,
    pub points: Vec<(f64, f64)>,
    pub consistency: SeriesConsistency,
}

/// Classify a record's series and extract the plotted points.
///
/// Mixed brightness/velocity arrays still classify as a transit; they are
/// logged so the data can be checked.
pub fn prepare_detail(record: &ExoplanetRecord) -> DetailView {
    let samples = record.samples();
    let template = classify(samples);
    let consistency = consistency(samples);
    if let SeriesConsistency::Mixed { brightness, velocity } = consistency {
        warn!(
            id = %record.id,
            brightness,
            velocity,
            "series mixes brightness and velocity samples; plotting brightness"
        );
    }
    let points = series(samples, template.data_key);
    debug!(id = %record.id, chart = template.title, points = points.len(), "classified series");

    DetailView {
        template,
        points,
        consistency,
    }
}
