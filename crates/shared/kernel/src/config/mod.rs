use crate::error::format_context;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vinewood_domain::site::SiteConfig;

/// Errors raised while loading process configuration or the site document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Site document I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Site document is malformed{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Attaches human-readable context to configuration failures.
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Io { source, context: Some(context.into()) })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Parse { source, context: Some(context.into()) })
    }
}

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "VINEWOOD";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). If no path is provided, it defaults to `"server"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `VINEWOOD__`.
///    Nested structures are accessed using double underscores (e.g., `VINEWOOD__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use vinewood_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Reads and parses the site document.
///
/// The document is consumed read-only for the life of the process. Optional fields that
/// are missing are not errors; only unreadable files and structurally invalid JSON are.
pub fn load_site(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
    let path = path.as_ref();
    info!("Loading site document from {}", path.display());

    let raw = std::fs::read(path).context(format!("Failed to read {}", path.display()))?;
    let site = parse_site(&raw)?;

    debug!(
        features = site.features.len(),
        jobs = site.jobs.list.len(),
        rules = site.rules.len(),
        team = site.team.len(),
        images = site.gallery.images.len(),
        "Site document loaded"
    );

    Ok(site)
}

/// Parses a site document from raw JSON bytes.
pub fn parse_site(raw: &[u8]) -> Result<SiteConfig, ConfigError> {
    serde_json::from_slice(raw).context("Failed to parse site document")
}
