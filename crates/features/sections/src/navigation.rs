use crate::format::{anchor, connect_url, ordinal, server_address};
use serde::Serialize;
use vinewood_domain::constants::{DEFAULT_MENU_ITEMS, HOME_ANCHOR};
use vinewood_domain::site::SiteConfig;
use vinewood_kernel::projection::resolve;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    /// Short name shown next to the logo.
    pub brand: String,
    /// Title of the collapsed mobile menu.
    pub menu_title: String,
    pub home: String,
    pub items: Vec<MenuItem>,
    /// `ip:port`, exposed for copying.
    pub address: Option<String>,
    /// `IP: 1.2.3.4`
    pub address_label: Option<String>,
    pub discord_url: String,
    pub connect_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// `01`, `02`, ...
    pub number: String,
    pub label: String,
    /// `#features`
    pub href: String,
}

/// Menu labels from the document, or the stock five sections.
pub fn menu_labels(site: &SiteConfig) -> Vec<String> {
    site.ui
        .navigation
        .as_ref()
        .and_then(|n| n.menu_items.clone())
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| DEFAULT_MENU_ITEMS.iter().map(|&s| s.to_owned()).collect())
}

pub fn project(site: &SiteConfig) -> NavigationView {
    let server = &site.server;
    let short_name = server.short_name.as_deref();

    NavigationView {
        brand: resolve(short_name, "RP"),
        menu_title: resolve(short_name, "Menu"),
        home: format!("#{HOME_ANCHOR}"),
        items: menu_labels(site)
            .into_iter()
            .enumerate()
            .map(|(i, label)| MenuItem { number: ordinal(i), href: anchor(&label), label })
            .collect(),
        address: server_address(server.ip.as_deref(), server.port),
        address_label: server.ip.as_deref().filter(|ip| !ip.trim().is_empty()).map(|ip| format!("IP: {ip}")),
        discord_url: resolve(site.social.discord.as_deref(), "#"),
        connect_url: connect_url(site.api.server_code.as_deref()),
    }
}
