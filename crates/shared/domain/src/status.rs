use serde::Serialize;

/// Where a [`ServerStatus`] snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSource {
    /// No probe has completed yet.
    Pending,
    /// The status API answered with a well-formed player list.
    Live,
    /// The probe failed or was not configured; the count is synthetic.
    Fallback,
}

/// Latest known state of the game server, as shown in the hero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub online: bool,
    pub players: u32,
    pub source: StatusSource,
}

impl ServerStatus {
    pub const fn live(players: u32) -> Self {
        Self { online: true, players, source: StatusSource::Live }
    }

    pub const fn fallback(players: u32) -> Self {
        Self { online: false, players, source: StatusSource::Fallback }
    }
}

impl Default for ServerStatus {
    /// Optimistic until the first probe lands, matching what visitors saw before any poll.
    fn default() -> Self {
        Self { online: true, players: 0, source: StatusSource::Pending }
    }
}
