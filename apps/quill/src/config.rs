//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quill_core::listing::CategoryChangePolicy;
use quill_infra::auth::DEFAULT_LATENCY;

use crate::telemetry::TelemetryConfig;

/// Where the session blob is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// `local_storage.json` in the data directory.
    File,
    /// Nothing survives the process.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub auth_latency: Duration,
    pub category_policy: CategoryChangePolicy,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let data_dir = env::var("QUILL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let storage = match env::var("QUILL_STORAGE").map(|v| v.to_lowercase()) {
            Ok(v) if v == "memory" => StorageKind::Memory,
            _ => StorageKind::File,
        };

        let auth_latency = env::var("QUILL_AUTH_LATENCY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY);

        let category_policy = if env_flag("QUILL_KEEP_SEARCH_ON_CATEGORY") {
            CategoryChangePolicy::KeepSearch
        } else {
            CategoryChangePolicy::ClearSearch
        };

        Self {
            data_dir,
            storage,
            auth_latency,
            category_policy,
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("quill"))
        .unwrap_or_else(|| PathBuf::from(".quill"))
}
