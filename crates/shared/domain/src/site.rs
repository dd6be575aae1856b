//! The site document.
//!
//! One JSON file (camelCase keys) describes everything the portal shows. It is
//! read once at startup and never mutated. Almost every field is optional: a
//! missing value is a configuration gap that the projectors resolve to a
//! default string, never an error.

use crate::team::TeamMember;
use serde::{Deserialize, Serialize};

/// Root of the site document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub server: ServerInfo,
    pub api: StatusApi,
    pub social: Social,
    pub features: Vec<Feature>,
    pub jobs: JobBoard,
    pub rules: Vec<Rule>,
    pub team: Vec<TeamMember>,
    pub gallery: GalleryBoard,
    pub ui: UiStrings,
    pub footer: FooterText,
    pub images: Images,
}

// --- Server ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerInfo {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub max_players: Option<u32>,
    pub logo: Option<Logo>,
    pub stats: ServerStats,
    pub loading_tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    Text,
    #[default]
    #[serde(other)]
    Image,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    #[serde(rename = "type")]
    pub kind: LogoKind,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerStats {
    pub total_players: Option<String>,
    pub active_gangs: Option<String>,
    pub businesses: Option<String>,
    pub established: Option<String>,
}

/// Third-party status endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusApi {
    pub cfx_api_url: String,
    pub server_code: Option<String>,
    /// Poll cadence in milliseconds.
    pub refresh_interval: u64,
}

impl Default for StatusApi {
    fn default() -> Self {
        Self {
            cfx_api_url: "https://servers-frontend.fivem.net/api/servers/single/".to_owned(),
            server_code: None,
            refresh_interval: 30_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub discord: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub twitch: Option<String>,
}

// --- Content ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobBoard {
    pub categories: Vec<JobCategory>,
    pub list: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: String,
    pub name: String,
    /// Absent means legal.
    #[serde(default)]
    pub legal: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Hourly pay in whole dollars.
    #[serde(default)]
    pub salary: u64,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Consequence band of a rule. Absent or unrecognised values are the lowest band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[default]
    #[serde(other)]
    Low,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryBoard {
    pub categories: Vec<GalleryCategory>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub src: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

// --- Overrides ---

/// Per-section override strings. Every leaf is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiStrings {
    pub navigation: Option<NavigationStrings>,
    pub features: Option<SectionHeading>,
    pub jobs: Option<JobsStrings>,
    pub rules: Option<RulesStrings>,
    pub team: Option<TeamStrings>,
    pub gallery: Option<GalleryStrings>,
    pub footer: Option<FooterStrings>,
    pub common: Option<CommonStrings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationStrings {
    pub menu_items: Option<Vec<String>>,
}

/// Heading block shared by most sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionHeading {
    pub section_tag: Option<String>,
    pub title: Option<String>,
    pub title_accent: Option<String>,
    pub subtitle: Option<String>,
    /// Banner line under the grid (features only).
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobsStrings {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub apply_button_text: Option<String>,
    pub total_jobs_label: Option<String>,
    pub salary_range_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesStrings {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub severity_labels: Option<SeverityLabels>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityLabels {
    pub high: Option<String>,
    pub medium: Option<String>,
    pub low: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStrings {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub join_title: Option<String>,
    pub join_subtitle: Option<String>,
    pub join_button: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryStrings {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub evidence_prefix: Option<String>,
    pub featured_badge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterStrings {
    pub server_connection: Option<String>,
    pub online_status: Option<String>,
    pub established_prefix: Option<String>,
    pub sections: Option<FooterSectionTitles>,
    pub stats_labels: Option<FooterStatsLabels>,
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSectionTitles {
    pub navigation: Option<String>,
    pub server_stats: Option<String>,
    pub connect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterStatsLabels {
    pub players: Option<String>,
    pub active_gangs: Option<String>,
    pub businesses: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonStrings {
    pub privacy: Option<String>,
    pub terms: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterText {
    pub copyright: Option<String>,
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub hero: Option<HeroImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroImages {
    pub loading_background: Option<String>,
    pub main_background: Option<String>,
}
