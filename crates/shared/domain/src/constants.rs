/// Reserved category id meaning "no filtering applied".
pub const ALL_CATEGORY: &str = "all";

/// Placeholder shipped in template site documents; treated as "no server code".
pub const PLACEHOLDER_SERVER_CODE: &str = "replaceme";

/// URI scheme prefix that hands a server code to the game client.
pub const CONNECT_SCHEME: &str = "fivem://connect/";

/// Anchor id of the hero block.
pub const HOME_ANCHOR: &str = "home";

/// Menu entries used when the site document does not list its own.
pub const DEFAULT_MENU_ITEMS: [&str; 5] = ["Features", "Jobs", "Rules", "Team", "Gallery"];

/// Section identifiers exposed on the JSON API.
pub const HERO: &str = "hero";
pub const FEATURES: &str = "features";
pub const JOBS: &str = "jobs";
pub const RULES: &str = "rules";
pub const TEAM: &str = "team";
pub const GALLERY: &str = "gallery";
pub const FOOTER: &str = "footer";
pub const NAVIGATION: &str = "navigation";

/// Every section in page order.
pub const SECTIONS: [&str; 8] = [NAVIGATION, HERO, FEATURES, JOBS, RULES, TEAM, GALLERY, FOOTER];
