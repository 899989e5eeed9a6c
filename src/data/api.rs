//! REST client for the exoplanet catalog backend.
//!
//! Endpoints (all `GET`, all JSON):
//! - `{base}/exoplanets`               list every record
//! - `{base}/exoplanets/{id}`          one record
//! - `{base}/exoplanets?search={q}`    backend-side free-text search
//!
//! Failures are logged with full detail (status, transport error, decode error)
//! and surfaced to callers as one generic, human-readable message.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::domain::ExoplanetRecord;
use crate::error::AppError;

const EXOPLANETS_PATH: &str = "exoplanets";

/// Detailed failure at the HTTP boundary. Only logged; never shown to users.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub struct ExoplanetClient {
    client: Client,
    base_url: Url,
}

impl ExoplanetClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::usage(format!("Invalid API base URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::usage(format!(
                "Invalid API base URL '{}': not a base URL",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::runtime(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full catalog.
    pub fn fetch_all(&self) -> Result<Vec<ExoplanetRecord>, AppError> {
        self.try_fetch_all().map_err(|err| {
            warn!(error = %err, status = ?err.status(), "failed to fetch exoplanets");
            AppError::runtime("Failed to load exoplanets. Please try again later.")
        })
    }

    /// Fetch a single record by id.
    pub fn fetch_by_id(&self, id: &str) -> Result<ExoplanetRecord, AppError> {
        self.try_fetch_by_id(id).map_err(|err| {
            warn!(error = %err, status = ?err.status(), id, "failed to fetch exoplanet");
            AppError::runtime(format!("Failed to load exoplanet {id}. Please try again later."))
        })
    }

    /// Backend-side search. A blank query returns nothing without a request.
    pub fn search(&self, query: &str) -> Result<Vec<ExoplanetRecord>, AppError> {
        if query.trim().is_empty() {
            debug!("blank search query; skipping request");
            return Ok(Vec::new());
        }
        self.try_search(query).map_err(|err| {
            warn!(error = %err, status = ?err.status(), query, "failed to search exoplanets");
            AppError::runtime("Failed to search exoplanets. Please try again later.")
        })
    }

    pub fn try_fetch_all(&self) -> Result<Vec<ExoplanetRecord>, ApiError> {
        let url = self.endpoint(&[EXOPLANETS_PATH])?;
        let records: Vec<ExoplanetRecord> = self.get_json(url)?;
        info!(count = records.len(), "fetched exoplanets");
        Ok(records)
    }

    pub fn try_fetch_by_id(&self, id: &str) -> Result<ExoplanetRecord, ApiError> {
        let url = self.endpoint(&[EXOPLANETS_PATH, id])?;
        let record: ExoplanetRecord = self.get_json(url)?;
        info!(id = %record.id, "fetched exoplanet");
        Ok(record)
    }

    pub fn try_search(&self, query: &str) -> Result<Vec<ExoplanetRecord>, ApiError> {
        let mut url = self.endpoint(&[EXOPLANETS_PATH])?;
        url.query_pairs_mut().append_pair("search", query);
        let records: Vec<ExoplanetRecord> = self.get_json(url)?;
        info!(count = records.len(), query, "searched exoplanets");
        Ok(records)
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a base URL".to_string(),
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let url_text = url.to_string();
        debug!(url = %url_text, "GET");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .map_err(|source| ApiError::Transport {
                url: url_text.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                url: url_text,
                status: resp.status(),
            });
        }

        resp.json()
            .map_err(|source| ApiError::Decode { url: url_text, source })
    }
}

/// Default request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
