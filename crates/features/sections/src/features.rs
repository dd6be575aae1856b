use crate::common::{Heading, HeadingDefaults};
use crate::format::ordinal;
use serde::Serialize;
use vinewood_domain::site::{Feature, SiteConfig};
use vinewood_kernel::projection::{Prominence, partition_by, resolve};

const HEADING: HeadingDefaults =
    HeadingDefaults { tag: "Server Features", title: "Server", accent: "Features", subtitle: None };
const DEFAULT_ICON: &str = "Box";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesView {
    pub heading: Heading,
    pub highlighted: Vec<FeatureCard>,
    pub regular: Vec<FeatureCard>,
    pub banner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub id: String,
    /// `01`, `02`, ... on highlighted cards only.
    pub number: Option<String>,
    pub title: String,
    pub description: String,
    /// Icon name hint; the renderer picks the glyph.
    pub icon: String,
}

impl FeatureCard {
    fn new(feature: &Feature, number: Option<String>) -> Self {
        Self {
            id: feature.id.clone(),
            number,
            title: feature.title.clone(),
            description: feature.description.clone(),
            icon: resolve(feature.icon.as_deref(), DEFAULT_ICON),
        }
    }
}

pub fn project(site: &SiteConfig) -> FeaturesView {
    let overrides = site.ui.features.as_ref();
    let parts = partition_by(&site.features, |f| Prominence::from_flag(f.highlight));

    let highlighted = parts
        .bucket(Prominence::Highlighted)
        .iter()
        .enumerate()
        .map(|(i, f)| FeatureCard::new(f, Some(ordinal(i))))
        .collect();
    let regular =
        parts.bucket(Prominence::Regular).iter().map(|f| FeatureCard::new(f, None)).collect();

    let banner_default = format!(
        "{}+ Players • Custom Scripts • Premium Experience",
        site.server.max_players.unwrap_or_default()
    );

    FeaturesView {
        heading: Heading::resolve(overrides, &HEADING),
        highlighted,
        regular,
        banner: resolve(overrides.and_then(|h| h.highlight.as_deref()), &banner_default),
    }
}
