//! Shared test setup: a TestServer backed by a temporary upload directory.

use axum_test::TestServer;
use picstash_api::setup;
use picstash_core::Config;
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:8000/image";

pub struct TestApp {
    pub server: TestServer,
    // Held so the upload directory outlives the test.
    _upload_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_base_url(TEST_BASE_URL).await
}

pub async fn setup_test_app_with_base_url(base_url: &str) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create temp upload dir");

    let config = Config {
        server_port: 8000,
        upload_dir: upload_dir.path().to_string_lossy().into_owned(),
        base_url: base_url.trim_end_matches('/').to_string(),
        allowed_mime_types: vec![
            "image/jpeg".to_string(),
            "image/png".to_string(),
            "image/webp".to_string(),
            "image/gif".to_string(),
        ],
        max_files: 5,
        upload_field: "images".to_string(),
    };

    let (_state, router) = setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        _upload_dir: upload_dir,
    }
}

/// Minimal valid PNG header bytes, enough to act as a file payload.
pub fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52,
    ]
}
