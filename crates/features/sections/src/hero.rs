use crate::format::{TitleWord, connect_url, split_title};
use serde::Serialize;
use vinewood_domain::site::SiteConfig;
use vinewood_domain::status::{ServerStatus, StatusSource};
use vinewood_kernel::projection::resolve;

const DEFAULT_NAME: &str = "Los Santos Roleplay";
const DEFAULT_TAGLINE: &str = "Los Santos Roleplay";
const DEFAULT_LOADING_TAGLINE: &str = "Welcome to the Experience";
const DEFAULT_DESCRIPTION: &str = "Experience the ultimate GTA V roleplay";
const DEFAULT_TOTAL_PLAYERS: &str = "15K+";
const DEFAULT_ACTIVE_JOBS: &str = "24/7";
const DEFAULT_MAIN_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1486428128344-5413e434ad35?w=1920&h=1080&fit=crop";
const DEFAULT_LOADING_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&h=1080&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub tagline: String,
    pub title: Vec<TitleWord>,
    pub description: String,
    pub status: StatusBadge,
    pub total_players: String,
    pub active_jobs: String,
    pub connect_url: Option<String>,
    pub discord_url: String,
    pub background: String,
    pub loading: LoadingScreen,
}

/// Live player counter and server state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub online: bool,
    /// `UP` or `DOWN`.
    pub label: &'static str,
    /// `37/128`, or just the count when the capacity is unknown.
    pub players: String,
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingScreen {
    pub title: String,
    pub tagline: String,
    pub background: String,
    pub tips: Vec<String>,
}

impl StatusBadge {
    pub fn new(status: ServerStatus, max_players: Option<u32>) -> Self {
        Self {
            online: status.online,
            label: if status.online { "UP" } else { "DOWN" },
            players: max_players.map_or_else(
                || status.players.to_string(),
                |max| format!("{}/{max}", status.players),
            ),
            live: status.source == StatusSource::Live,
        }
    }
}

pub fn project(site: &SiteConfig, status: ServerStatus) -> HeroView {
    let server = &site.server;
    let hero_images = site.images.hero.as_ref();
    let name = resolve(server.name.as_deref(), DEFAULT_NAME);

    HeroView {
        tagline: resolve(server.tagline.as_deref(), DEFAULT_TAGLINE),
        title: split_title(&name),
        description: resolve(server.description.as_deref(), DEFAULT_DESCRIPTION),
        status: StatusBadge::new(status, server.max_players),
        total_players: resolve(server.stats.total_players.as_deref(), DEFAULT_TOTAL_PLAYERS),
        active_jobs: match site.jobs.list.len() {
            0 => DEFAULT_ACTIVE_JOBS.to_owned(),
            n => n.to_string(),
        },
        connect_url: connect_url(site.api.server_code.as_deref()),
        discord_url: resolve(site.social.discord.as_deref(), "#"),
        background: resolve(
            hero_images.and_then(|h| h.main_background.as_deref()),
            DEFAULT_MAIN_BACKGROUND,
        ),
        loading: LoadingScreen {
            tagline: resolve(server.tagline.as_deref(), DEFAULT_LOADING_TAGLINE),
            background: resolve(
                hero_images.and_then(|h| h.loading_background.as_deref()),
                DEFAULT_LOADING_BACKGROUND,
            ),
            tips: server.loading_tips.clone(),
            title: name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_site_uses_defaults() {
        let view = project(&SiteConfig::default(), ServerStatus::default());

        assert_eq!(view.tagline, "Los Santos Roleplay");
        assert_eq!(view.title.last().map(|w| w.text.as_str()), Some("Roleplay"));
        assert_eq!(view.active_jobs, "24/7");
        assert_eq!(view.discord_url, "#");
        assert_eq!(view.connect_url, None);
        assert_eq!(view.loading.tagline, "Welcome to the Experience");
        assert_eq!(view.status.label, "UP");
    }

    #[test]
    fn status_badge_formats_capacity() {
        assert_eq!(StatusBadge::new(ServerStatus::live(37), Some(128)).players, "37/128");
        let offline = StatusBadge::new(ServerStatus::fallback(12), None);
        assert_eq!(offline.players, "12");
        assert_eq!(offline.label, "DOWN");
        assert!(!offline.live);
    }
}
