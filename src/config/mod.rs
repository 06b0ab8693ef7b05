//! Typed configuration from environment variables.
//!
//! Loads once at startup. Nothing here is required — every value has a
//! sensible default so the CLI works out of the box.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the identity database.
    pub db_path: PathBuf,
    /// Optional OTLP endpoint for telemetry export.
    pub otel_endpoint: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("PROMPTLAB_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_db_path()),
            otel_endpoint: std::env::var("OTEL_ENDPOINT").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("promptlab").join("identities.db"))
        .unwrap_or_else(|| PathBuf::from("promptlab.db"))
}
