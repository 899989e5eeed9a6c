//! Catalog sources and fetch state.
//!
//! `Catalog` tracks one load at a time:
//! - `loading` is raised before a load and lowered on every exit path
//! - a failure stores a human-readable message in `error` and keeps the
//!   previously loaded records
//! - `refetch` simply loads again (no retry, no cancellation)

use std::path::PathBuf;

use tracing::{error, info};

use crate::data::api::ExoplanetClient;
use crate::data::mock::mock_catalog;
use crate::domain::ExoplanetRecord;
use crate::error::AppError;

/// Where records come from.
pub enum CatalogSource {
    /// The built-in mock dataset.
    Mock,
    /// The REST backend.
    Api(ExoplanetClient),
    /// A local JSON file holding an array of records.
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Mock => "mock catalog".to_string(),
            CatalogSource::Api(client) => format!("API {}", client.base_url()),
            CatalogSource::File(path) => format!("file {}", path.display()),
        }
    }

    /// Load every record from this source.
    pub fn load_all(&self) -> Result<Vec<ExoplanetRecord>, AppError> {
        match self {
            CatalogSource::Mock => Ok(mock_catalog()),
            CatalogSource::Api(client) => client.fetch_all(),
            CatalogSource::File(path) => crate::io::read_records_json(path),
        }
    }

    /// Look up one record by id.
    ///
    /// The API source asks the backend; the others scan the full list.
    pub fn load_one(&self, id: &str) -> Result<ExoplanetRecord, AppError> {
        match self {
            CatalogSource::Api(client) => client.fetch_by_id(id),
            _ => self
                .load_all()?
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| AppError::usage(format!("No exoplanet with id '{id}'."))),
        }
    }
}

/// Records plus the state of the most recent load.
pub struct Catalog {
    source: CatalogSource,
    records: Vec<ExoplanetRecord>,
    loading: bool,
    error: Option<AppError>,
}

impl Catalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn records(&self) -> &[ExoplanetRecord] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message())
    }

    /// Load (or reload) the records. Returns whether the load succeeded.
    pub fn refetch(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let outcome = self.source.load_all();
        self.loading = false;

        match outcome {
            Ok(records) => {
                info!(count = records.len(), source = %self.source.describe(), "catalog loaded");
                self.records = records;
                true
            }
            Err(err) => {
                error!(source = %self.source.describe(), error = %err, "catalog load failed");
                self.error = Some(err);
                false
            }
        }
    }

    /// Like `refetch`, but turns a failure into an `AppError`.
    pub fn load(&mut self) -> Result<&[ExoplanetRecord], AppError> {
        if self.refetch() {
            return Ok(&self.records);
        }
        Err(self
            .error
            .clone()
            .unwrap_or_else(|| AppError::runtime("Failed to load exoplanets")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_loads_and_clears_flags() {
        let mut catalog = Catalog::new(CatalogSource::Mock);
        assert!(catalog.records().is_empty());

        assert!(catalog.refetch());
        assert!(!catalog.loading());
        assert!(catalog.error().is_none());
        assert_eq!(catalog.records().len(), 8);
    }

    #[test]
    fn failed_load_keeps_records_and_reports_message() {
        let mut catalog = Catalog::new(CatalogSource::Mock);
        assert!(catalog.refetch());

        catalog.source = CatalogSource::File(PathBuf::from("/definitely/not/here.json"));
        assert!(!catalog.refetch());
        assert!(!catalog.loading(), "loading must drop on the failure path");
        assert!(catalog.error().unwrap().contains("not/here.json"));
        assert_eq!(catalog.records().len(), 8, "previous records are kept");

        let err = catalog.load().unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn load_one_scans_local_sources() {
        let source = CatalogSource::Mock;
        assert_eq!(source.load_one("wasp-96b").unwrap().name, "WASP-96b");
        assert!(source.load_one("nope").is_err());
    }
}
