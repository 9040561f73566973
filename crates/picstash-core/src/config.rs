//! Configuration module
//!
//! All knobs of the service live in one explicit struct built from the
//! environment, with hardcoded defaults matching the original deployment.

use anyhow::Context;
use std::env;

const SERVER_PORT: u16 = 8000;
const UPLOAD_DIR: &str = "./public/uploads";
const MAX_FILES: usize = 5;
const UPLOAD_FIELD: &str = "images";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub server_port: u16,
    /// Directory uploaded files are written to. Created at startup if missing.
    pub upload_dir: String,
    /// Externally visible prefix for links to stored files.
    pub base_url: String,
    /// Content types accepted at intake (declared type, lowercase).
    pub allowed_mime_types: Vec<String>,
    /// Maximum number of file parts accepted per request.
    pub max_files: usize,
    /// Multipart field name file parts must use.
    pub upload_field: String,
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// Recognized variables: `PORT`, `UPLOAD_DIR`, `BASE_URL`. When
    /// `BASE_URL` is unset, generated URLs fall back to
    /// `http://localhost:{port}/image`.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port: u16 = env::var("PORT")
            .unwrap_or_else(|_| SERVER_PORT.to_string())
            .parse()
            .context("Invalid PORT")?;

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| UPLOAD_DIR.to_string());

        let base_url = env::var("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{}/image", server_port));

        Ok(Config {
            server_port,
            upload_dir,
            base_url,
            allowed_mime_types: default_allowed_mime_types(),
            max_files: MAX_FILES,
            upload_field: UPLOAD_FIELD.to_string(),
        })
    }

    /// Public URL for a stored filename.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url, filename)
    }
}

fn default_allowed_mime_types() -> Vec<String> {
    ["image/jpeg", "image/png", "image/webp", "image/gif"]
        .into_iter()
        .map(String::from)
        .collect()
}
