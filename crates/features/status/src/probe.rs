use crate::error::{StatusError, StatusErrorExt};
use rand::Rng;
use reqwest::header::ACCEPT;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{debug, warn};
use vinewood_domain::config::StatusConfig;
use vinewood_domain::constants::PLACEHOLDER_SERVER_CODE;
use vinewood_domain::site::StatusApi;
use vinewood_domain::status::ServerStatus;

/// One-shot player count lookup against the public server-list API.
#[derive(Debug, Clone)]
pub struct StatusProbe {
    client: reqwest::Client,
    endpoint: Option<String>,
    fallback: RangeInclusive<u32>,
}

#[derive(Debug, thiserror::Error)]
enum ProbeFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("payload has no Data.players array")]
    Payload,
}

impl StatusProbe {
    /// Builds a probe for `{cfxApiUrl}{serverCode}`.
    ///
    /// A missing, blank or placeholder server code leaves the probe without an
    /// endpoint: every call then reports a fallback snapshot without touching the network.
    pub fn new(api: &StatusApi, settings: &StatusConfig) -> Result<Self, StatusError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(concat!("vinewood/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build status HTTP client")?;

        let endpoint = api
            .server_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && *code != PLACEHOLDER_SERVER_CODE)
            .map(|code| format!("{}{code}", api.cfx_api_url));

        let (lo, hi) = (settings.fallback_min, settings.fallback_max);
        let fallback = lo.min(hi)..=lo.max(hi);

        Ok(Self { client, endpoint, fallback })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Performs one lookup. Never fails; see [`ServerStatus::fallback`].
    pub async fn probe(&self) -> ServerStatus {
        let Some(url) = self.endpoint.as_deref() else {
            debug!("No server code configured, reporting fallback status");
            return self.fallback();
        };

        match self.fetch(url).await {
            Ok(players) => {
                debug!(players, "Status probe succeeded");
                ServerStatus::live(players)
            },
            Err(err) => {
                warn!(error = %err, url, "Status probe failed, reporting fallback status");
                self.fallback()
            },
        }
    }

    async fn fetch(&self, url: &str) -> Result<u32, ProbeFailure> {
        let response = self.client.get(url).header(ACCEPT, "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeFailure::Status(status));
        }

        let body = response.bytes().await?;
        parse_player_count(&body).ok_or(ProbeFailure::Payload)
    }

    fn fallback(&self) -> ServerStatus {
        ServerStatus::fallback(rand::rng().random_range(self.fallback.clone()))
    }
}

/// Extracts the length of `Data.players` from a server-list payload.
pub fn parse_player_count(raw: &[u8]) -> Option<u32> {
    let payload: serde_json::Value = serde_json::from_slice(raw).ok()?;
    let players = payload.get("Data")?.get("players")?.as_array()?;
    u32::try_from(players.len()).ok()
}
