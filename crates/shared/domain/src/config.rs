use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level process configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub site: SiteSource,
    pub status: StatusConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Where the site document lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSource {
    pub path: PathBuf,
}

/// Live status probe tuning.
///
/// The polling cadence itself comes from the site document (`api.refreshInterval`);
/// `min_interval_ms` only guards against a misconfigured, hammering value.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub timeout_ms: u64,
    pub min_interval_ms: u64,
    pub fallback_min: u32,
    pub fallback_max: u32,
}

/// Logger settings consumed by the binary at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583 }
    }
}

impl Default for SiteSource {
    fn default() -> Self {
        Self { path: PathBuf::from("site.config.json") }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { timeout_ms: 5_000, min_interval_ms: 5_000, fallback_min: 10, fallback_max: 59 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false, path: None }
    }
}
