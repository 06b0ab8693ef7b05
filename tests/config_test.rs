//! Configuration loading tests.
//!
//! Env mutation is process-global, so everything runs in one test to
//! avoid interleaving with the parallel harness.

use std::path::PathBuf;

use promptlab::config::Config;

#[test]
fn from_env_overrides_and_defaults() {
    unsafe {
        std::env::set_var("PROMPTLAB_DB", "/tmp/test-promptlab.db");
        std::env::set_var("OTEL_ENDPOINT", "http://localhost:4317");
        std::env::set_var("LOG_LEVEL", "debug");
    }

    let config = Config::from_env();
    assert_eq!(config.db_path, PathBuf::from("/tmp/test-promptlab.db"));
    assert_eq!(
        config.otel_endpoint.as_deref(),
        Some("http://localhost:4317")
    );
    assert_eq!(config.log_level, "debug");

    unsafe {
        std::env::remove_var("PROMPTLAB_DB");
        std::env::remove_var("OTEL_ENDPOINT");
        std::env::remove_var("LOG_LEVEL");
    }

    let config = Config::from_env();
    assert!(config.otel_endpoint.is_none());
    assert_eq!(config.log_level, "info");
    // Default path ends with the app-scoped file name.
    assert!(config.db_path.ends_with("promptlab/identities.db") || config.db_path == PathBuf::from("promptlab.db"));
}
