//! # Vinewood Server
//!
//! Serves the landing page of a roleplay game server: the server-rendered HTML
//! page, the section view models as JSON, the live status snapshot and the
//! loading sequence as a Server-Sent Events stream.
//!
//! ## Example
//! ```no_run
//! use vinewood_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4583)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod handlers;
mod router;

pub use router::init as app;

use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};
use vinewood_domain::config::AppConfig;
use vinewood_domain::site::SiteConfig;
use vinewood_kernel::config::load_site;
use vinewood_kernel::server::AppState;
use vinewood_status::{StatusMonitor, StatusProbe, poll_interval};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
    site: Option<SiteConfig>,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Uses an already loaded site document instead of reading `site.path`.
    pub fn site(mut self, site: SiteConfig) -> Self {
        self.site = Some(site);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Loads the site document, starts the status monitor and assembles the shared state.
    ///
    /// Must be called from within a Tokio runtime: the monitor task starts right away.
    ///
    /// # Errors
    /// Returns an error if the site document cannot be read or parsed, or if the
    /// status HTTP client cannot be built.
    pub fn build(self) -> Result<Server> {
        let site = match self.site {
            Some(site) => site,
            None => load_site(&self.cfg.site.path).context("Failed to load the site document")?,
        };

        let probe =
            StatusProbe::new(&site.api, &self.cfg.status).context("Failed to build status probe")?;
        let every = poll_interval(&site.api, &self.cfg.status);

        info!(
            endpoint = probe.endpoint().unwrap_or("<fallback>"),
            every_ms = u64::try_from(every.as_millis()).unwrap_or(u64::MAX),
            "Starting status monitor"
        );
        let monitor = StatusMonitor::spawn(probe, every);

        let state = AppState::builder()
            .config(self.cfg)
            .site(site)
            .status(monitor.subscribe())
            .build()
            .context("Failed to finalize application state")?;

        Ok(Server { state, monitor })
    }
}

/// A fully initialized server instance ready to run.
///
/// Owns the status monitor; polling stops when the server is dropped.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
    monitor: StatusMonitor,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves HTTP until Ctrl+C or SIGTERM, then drains connections.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        drop(self.monitor);
        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
