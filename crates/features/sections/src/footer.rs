use crate::format::{anchor, connect_url, server_address};
use crate::navigation::menu_labels;
use serde::Serialize;
use vinewood_domain::site::{LogoKind, SiteConfig};
use vinewood_kernel::projection::{resolve, resolve_chain};

const DEFAULT_NAME: &str = "Los Santos RP";
const DEFAULT_DESCRIPTION: &str = "Experience the most immersive GTA V roleplay server";
const DEFAULT_DISCLAIMER: &str = "Not affiliated with Rockstar Games";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub brand: String,
    pub description: String,
    pub connection_title: String,
    /// `ip:port`, exposed for copying.
    pub address: Option<String>,
    pub online_label: String,
    /// `Est. 2024`
    pub established: String,
    pub navigation_title: String,
    pub navigation: Vec<Link>,
    pub stats_title: String,
    pub stats: Vec<Stat>,
    pub connect_title: String,
    pub socials: Vec<SocialLink>,
    pub play_url: Option<String>,
    pub copyright: String,
    pub privacy: String,
    pub terms: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: String,
    /// Icon name hint.
    pub icon: &'static str,
}

/// Configured social links in fixed platform order; absent ones are skipped.
pub fn social_links(site: &SiteConfig) -> Vec<SocialLink> {
    let social = &site.social;
    [
        ("Discord", "discord", social.discord.as_deref()),
        ("Twitter", "twitter", social.twitter.as_deref()),
        ("Youtube", "youtube", social.youtube.as_deref()),
        ("Instagram", "instagram", social.instagram.as_deref()),
        ("Twitch", "twitch", social.twitch.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, icon, url)| {
        let url = url.filter(|u| !u.trim().is_empty())?;
        Some(SocialLink { name, url: url.to_owned(), icon })
    })
    .collect()
}

/// Renders the footer. `year` feeds the default copyright line.
pub fn project(site: &SiteConfig, year: i32) -> FooterView {
    let server = &site.server;
    let ui = site.ui.footer.as_ref();
    let sections = ui.and_then(|f| f.sections.as_ref());
    let labels = ui.and_then(|f| f.stats_labels.as_ref());
    let stats = &server.stats;
    let common = site.ui.common.as_ref();

    let name = resolve(server.name.as_deref(), DEFAULT_NAME);
    let brand = match &server.logo {
        Some(logo) if logo.kind == LogoKind::Text => resolve(Some(logo.content.as_str()), &name),
        _ => name.clone(),
    };

    let established = format!(
        "{} {}",
        resolve(ui.and_then(|f| f.established_prefix.as_deref()), "Est."),
        resolve(stats.established.as_deref(), "2024")
    );

    FooterView {
        brand,
        description: resolve(server.description.as_deref(), DEFAULT_DESCRIPTION),
        connection_title: resolve(
            ui.and_then(|f| f.server_connection.as_deref()),
            "Server Connection",
        ),
        address: server_address(server.ip.as_deref(), server.port),
        online_label: resolve(ui.and_then(|f| f.online_status.as_deref()), "Online"),
        established,
        navigation_title: resolve(sections.and_then(|s| s.navigation.as_deref()), "Navigation"),
        navigation: menu_labels(site)
            .into_iter()
            .map(|label| Link { href: anchor(&label), label })
            .collect(),
        stats_title: resolve(sections.and_then(|s| s.server_stats.as_deref()), "Server Stats"),
        stats: vec![
            Stat {
                label: resolve(labels.and_then(|l| l.players.as_deref()), "Players"),
                value: resolve(stats.total_players.as_deref(), "15K+"),
            },
            Stat {
                label: resolve(labels.and_then(|l| l.active_gangs.as_deref()), "Gangs"),
                value: resolve(stats.active_gangs.as_deref(), "12"),
            },
            Stat {
                label: resolve(labels.and_then(|l| l.businesses.as_deref()), "Businesses"),
                value: resolve(stats.businesses.as_deref(), "45+"),
            },
        ],
        connect_title: resolve(sections.and_then(|s| s.connect.as_deref()), "Connect"),
        socials: social_links(site),
        play_url: connect_url(site.api.server_code.as_deref()),
        copyright: resolve(
            site.footer.copyright.as_deref(),
            &format!("© {year} {name}. All rights reserved."),
        ),
        privacy: resolve(common.and_then(|c| c.privacy.as_deref()), "Privacy"),
        terms: resolve(common.and_then(|c| c.terms.as_deref()), "Terms"),
        disclaimer: resolve_chain(
            [site.footer.disclaimer.as_deref(), ui.and_then(|f| f.disclaimer.as_deref())],
            DEFAULT_DISCLAIMER,
        ),
    }
}
