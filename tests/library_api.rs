mod common;

use common::{SAMPLE_CATALOG, TestContext};
use sdkc::{
    AppError, ComponentStatus, ListOptions, list_components_at, list_local_components_at,
};

fn point_at(ctx: &TestContext, url: &str, extra: &str) {
    ctx.write_config(&format!(
        "[catalog]\nurl = \"{}\"\nretry_delay_ms = 1\n{}",
        url, extra
    ));
}

#[test]
fn public_api_lists_components_from_http_catalog() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/components-v1.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SAMPLE_CATALOG)
        .expect(1)
        .create();

    let ctx = TestContext::new();
    point_at(&ctx, &format!("{}/components-v1.json", server.url()), "");
    ctx.install(&[("bq", "3.0")]);

    let listing = list_components_at(ctx.sdk_root(), ListOptions::default()).unwrap();
    assert_eq!(listing.entries.len(), 3);
    assert_eq!(listing.count(ComponentStatus::UpdateAvailable), 1);
    assert_eq!(listing.count(ComponentStatus::NotInstalled), 2);
    assert!(listing.has_updates());

    // Served from the on-disk cache; the server sees one request only.
    let again = list_components_at(ctx.sdk_root(), ListOptions::default()).unwrap();
    assert_eq!(again, listing);
    mock.assert();
}

#[test]
fn public_api_refresh_bypasses_cache() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/components-v1.json")
        .with_status(200)
        .with_body(SAMPLE_CATALOG)
        .expect(2)
        .create();

    let ctx = TestContext::new();
    point_at(&ctx, &format!("{}/components-v1.json", server.url()), "");

    list_components_at(ctx.sdk_root(), ListOptions::default()).unwrap();
    list_components_at(ctx.sdk_root(), ListOptions { show_versions: true, refresh: true })
        .unwrap();
    mock.assert();
}

#[test]
fn public_api_reports_http_failure_with_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/components-v1.json")
        .with_status(503)
        .with_body(r#"{"error": {"message": "maintenance window"}}"#)
        .expect(2)
        .create();

    let ctx = TestContext::new();
    point_at(&ctx, &format!("{}/components-v1.json", server.url()), "max_retries = 2\n");

    let err = list_components_at(ctx.sdk_root(), ListOptions::default()).unwrap_err();
    match err {
        AppError::CatalogUnavailable { status, message, .. } => {
            assert_eq!(status, Some(503));
            assert!(message.contains("maintenance window"));
        }
        other => panic!("unexpected error: {other}"),
    }
    mock.assert();
    assert!(!ctx.cache_path().exists());
}

#[test]
fn public_api_does_not_retry_client_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/components-v1.json")
        .with_status(404)
        .expect(1)
        .create();

    let ctx = TestContext::new();
    point_at(&ctx, &format!("{}/components-v1.json", server.url()), "max_retries = 3\n");

    let err = list_components_at(ctx.sdk_root(), ListOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::CatalogUnavailable { status: Some(404), .. }));
    mock.assert();
}

#[test]
fn public_api_local_listing_needs_no_catalog() {
    let ctx = TestContext::new();
    ctx.install(&[("gcloud", "2.0")]);

    let listing = list_local_components_at(ctx.sdk_root(), false).unwrap();
    assert_eq!(listing.entries.len(), 1);
    assert_eq!(listing.entries[0].id.as_str(), "gcloud");
    assert_eq!(listing.entries[0].display_name, None);
}
