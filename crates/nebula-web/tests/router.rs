//! Integration tests for the Axum router

#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use nebula_core::SiteConfig;
use tower::ServiceExt;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let router = nebula_web::create_router(SiteConfig::default(), None);
    let (status, body) = get(router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint_reflects_server_config() {
    let config = SiteConfig {
        breakpoint_px: 1024,
        ..Default::default()
    };
    let router = nebula_web::create_router(config.clone(), None);
    let (status, body) = get(router, "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: SiteConfig = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, config);
}

#[tokio::test]
async fn test_content_endpoint() {
    let router = nebula_web::create_router(SiteConfig::default(), None);
    let (status, body) = get(router, "/api/content").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["brand"], "NEBULA MOTORS");
    assert_eq!(json["models"].as_array().unwrap().len(), 3);
    assert_eq!(json["nav"][0], "models");
}

#[tokio::test]
async fn test_setup_page_without_bundle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let router = nebula_web::create_router(SiteConfig::default(), Some(temp_dir.path()));
    let (status, body) = get(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Build Required"));
    assert!(body.contains("trunk build"));
}

#[tokio::test]
async fn test_serves_built_bundle_with_index_fallback() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("index.html"),
        "<html><body>nebula bundle</body></html>",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("app.js"), "console.log('nebula');").unwrap();

    let router = nebula_web::create_router(SiteConfig::default(), Some(temp_dir.path()));

    let (status, body) = get(router.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("nebula bundle"));

    let (status, body) = get(router.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("console.log"));

    // Unknown paths land on the page so fragment links still work
    let (status, body) = get(router.clone(), "/models").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("nebula bundle"));

    // API routes take precedence over static files
    let (status, _) = get(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}
