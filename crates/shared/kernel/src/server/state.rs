use crate::error::format_context;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::watch;
use vinewood_domain::config::AppConfig;
use vinewood_domain::site::SiteConfig;
use vinewood_domain::status::ServerStatus;

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    pub site: Arc<SiteConfig>,
    status: watch::Receiver<ServerStatus>,
}

/// Shared, cheaply clonable request state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    /// Latest status snapshot published by the monitor.
    pub fn status(&self) -> ServerStatus {
        *self.inner.status.borrow()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    site: Option<Arc<SiteConfig>>,
    status: Option<watch::Receiver<ServerStatus>>,
}

impl AppStateBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn site(mut self, site: impl Into<Arc<SiteConfig>>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn status(mut self, status: watch::Receiver<ServerStatus>) -> Self {
        self.status = Some(status);
        self
    }

    /// Without a status receiver the state reports a constant pending snapshot.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let site = self.site.ok_or_else(|| AppStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;
        let config = self.config.unwrap_or_default();
        let status = self.status.unwrap_or_else(|| watch::channel(ServerStatus::default()).1);

        Ok(AppState { inner: Arc::new(AppStateInner { config, site, status }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_is_required() {
        let err = AppState::builder().build().unwrap_err();
        assert!(err.to_string().contains("SiteConfig not provided"));
    }

    #[test]
    fn status_follows_sender() {
        let (tx, rx) = watch::channel(ServerStatus::default());
        let state = AppState::builder().site(SiteConfig::default()).status(rx).build().unwrap();

        tx.send_replace(ServerStatus::live(37));
        assert_eq!(state.status(), ServerStatus::live(37));
    }

    #[test]
    fn detached_status_stays_pending() {
        let state = AppState::builder().site(SiteConfig::default()).build().unwrap();
        assert_eq!(state.status(), ServerStatus::default());
    }
}
