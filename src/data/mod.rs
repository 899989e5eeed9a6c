//! Catalog data: the REST client, the built-in mock catalog, load state,
//! and the static model-performance figures.

pub mod api;
pub mod catalog;
pub mod mock;
pub mod performance;

pub use api::{ApiError, ExoplanetClient};
pub use catalog::{Catalog, CatalogSource};
pub use mock::mock_catalog;
pub use performance::{PR_CURVE, ROC_CURVE, model_performance};
