//! The blocking catalog client against a local mock backend.
//!
//! The mock server needs a tokio runtime; the blocking client must not run on
//! it, so every client call goes through `spawn_blocking`.

use std::time::Duration;

use exo_atlas::config::ApiConfig;
use exo_atlas::data::{CatalogSource, ExoplanetClient};
use exo_atlas::domain::{DiscoveryMethod, ExoplanetRecord};
use exo_atlas::error::{AppError, EXIT_RUNTIME};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn blocking<T, F>(server: &MockServer, call: F) -> T
where
    F: FnOnce(&ExoplanetClient) -> T + Send + 'static,
    T: Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = ExoplanetClient::new(&ApiConfig {
            base_url: uri,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        call(&client)
    })
    .await
    .unwrap()
}

fn sample_records() -> serde_json::Value {
    json!([
        {
            "id": "kepler-452b",
            "name": "Kepler-452b",
            "discovery_method": "Transit",
            "discovery_year": 2015,
            "radius": 1.63,
            "mass": null,
            "host_star": "Kepler-452",
            "mission": "Kepler",
            "graph_data": [
                { "time": 0.0, "brightness": 1.0 },
                { "time": 1.0, "brightness": 0.9995 }
            ]
        },
        {
            "id": "ogle-2005-blg-390lb",
            "name": "OGLE-2005-BLG-390Lb",
            "discovery_method": "Gravitational Lensing",
            "discovery_year": 2005
        }
    ])
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_all_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_records()))
        .expect(1)
        .mount(&server)
        .await;

    let records: Vec<ExoplanetRecord> = blocking(&server, |c| c.fetch_all()).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].radius, Some(1.63));
    assert_eq!(records[0].mass, None, "null means not detected");
    assert_eq!(records[0].samples().len(), 2);
    assert_eq!(
        records[1].discovery_method,
        DiscoveryMethod::Other("Gravitational Lensing".to_string()),
        "unknown labels are kept"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_becomes_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err: AppError = blocking(&server, |c| c.fetch_all()).await.unwrap_err();

    assert_eq!(err.exit_code(), EXIT_RUNTIME);
    assert_eq!(err.message(), "Failed to load exoplanets. Please try again later.");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_becomes_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = blocking(&server, |c| c.fetch_all()).await.unwrap_err();
    assert_eq!(err.message(), "Failed to load exoplanets. Please try again later.");

    // The detailed error keeps the cause for logs.
    let detail = blocking(&server, |c| c.try_fetch_all()).await.unwrap_err();
    assert!(detail.status().is_none());
    assert!(detail.to_string().contains("failed to parse response"), "{detail}");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_by_id_hits_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets/kepler-452b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sample_records()[0]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exoplanets/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let record = blocking(&server, |c| c.fetch_by_id("kepler-452b")).await.unwrap();
    assert_eq!(record.name, "Kepler-452b");

    let err = blocking(&server, |c| c.fetch_by_id("missing")).await.unwrap_err();
    assert_eq!(err.message(), "Failed to load exoplanet missing. Please try again later.");

    let detail = blocking(&server, |c| c.try_fetch_by_id("missing")).await.unwrap_err();
    assert_eq!(detail.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_sends_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets"))
        .and(query_param("search", "kepler 452"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_records()[0]])))
        .expect(1)
        .mount(&server)
        .await;

    let records = blocking(&server, |c| c.search("kepler 452")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "kepler-452b");

    let err = blocking(&server, |c| c.search("other")).await.unwrap_err();
    assert_eq!(err.message(), "Failed to search exoplanets. Please try again later.");
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_search_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let records = blocking(&server, |c| c.search("   ")).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn api_source_loads_through_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exoplanets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_records()))
        .mount(&server)
        .await;

    let base = server.uri();
    let count = tokio::task::spawn_blocking(move || {
        let client = ExoplanetClient::new(&ApiConfig {
            base_url: base,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let mut catalog = exo_atlas::data::Catalog::new(CatalogSource::Api(client));
        assert!(catalog.refetch());
        assert!(!catalog.loading());
        catalog.records().len()
    })
    .await
    .unwrap();

    assert_eq!(count, 2);
}

#[test]
fn unreachable_backend_reports_generic_message() {
    // Port 9 (discard) is almost never listening; a short timeout keeps this quick.
    let client = ExoplanetClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_millis(500),
    })
    .unwrap();
    let mut catalog = exo_atlas::data::Catalog::new(CatalogSource::Api(client));

    assert!(!catalog.refetch());
    assert!(!catalog.loading());
    assert_eq!(
        catalog.error(),
        Some("Failed to load exoplanets. Please try again later.")
    );
}
