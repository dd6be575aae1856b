use crate::error::SectionError;
use crate::selection::Selection;
use crate::{features, footer, gallery, hero, jobs, navigation, rules, team};
use serde::Serialize;
use std::str::FromStr;
use vinewood_domain::constants;
use vinewood_domain::site::SiteConfig;
use vinewood_domain::status::ServerStatus;

/// Everything a projection may read: the document, the latest status, the
/// current year and the visitor's selection.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub status: ServerStatus,
    pub year: i32,
    pub selection: &'a Selection,
}

/// Every section of the page, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteView {
    pub navigation: navigation::NavigationView,
    pub hero: hero::HeroView,
    pub features: features::FeaturesView,
    pub jobs: jobs::JobsView,
    pub rules: rules::RulesView,
    pub team: team::TeamView,
    pub gallery: gallery::GalleryView,
    pub footer: footer::FooterView,
}

impl SiteView {
    pub fn project(ctx: &PageContext<'_>) -> Self {
        let site = ctx.site;
        Self {
            navigation: navigation::project(site),
            hero: hero::project(site, ctx.status),
            features: features::project(site),
            jobs: jobs::project(site, ctx.selection),
            rules: rules::project(site, ctx.selection),
            team: team::project(site),
            gallery: gallery::project(site, ctx.selection),
            footer: footer::project(site, ctx.year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Navigation,
    Hero,
    Features,
    Jobs,
    Rules,
    Team,
    Gallery,
    Footer,
}

impl SectionKind {
    pub const ALL: [Self; 8] = [
        Self::Navigation,
        Self::Hero,
        Self::Features,
        Self::Jobs,
        Self::Rules,
        Self::Team,
        Self::Gallery,
        Self::Footer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => constants::NAVIGATION,
            Self::Hero => constants::HERO,
            Self::Features => constants::FEATURES,
            Self::Jobs => constants::JOBS,
            Self::Rules => constants::RULES,
            Self::Team => constants::TEAM,
            Self::Gallery => constants::GALLERY,
            Self::Footer => constants::FOOTER,
        }
    }

    /// Projects only this section.
    pub fn project(self, ctx: &PageContext<'_>) -> SectionView {
        let site = ctx.site;
        match self {
            Self::Navigation => SectionView::Navigation(navigation::project(site)),
            Self::Hero => SectionView::Hero(hero::project(site, ctx.status)),
            Self::Features => SectionView::Features(features::project(site)),
            Self::Jobs => SectionView::Jobs(jobs::project(site, ctx.selection)),
            Self::Rules => SectionView::Rules(rules::project(site, ctx.selection)),
            Self::Team => SectionView::Team(team::project(site)),
            Self::Gallery => SectionView::Gallery(gallery::project(site, ctx.selection)),
            Self::Footer => SectionView::Footer(footer::project(site, ctx.year)),
        }
    }
}

impl FromStr for SectionKind {
    type Err = SectionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name).ok_or_else(|| {
            SectionError::Unknown {
                name: name.to_owned(),
                context: Some(format!("expected one of {}", constants::SECTIONS.join(", ")).into()),
            }
        })
    }
}

/// A single projected section, serialized as its bare view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionView {
    Navigation(navigation::NavigationView),
    Hero(hero::HeroView),
    Features(features::FeaturesView),
    Jobs(jobs::JobsView),
    Rules(rules::RulesView),
    Team(team::TeamView),
    Gallery(gallery::GalleryView),
    Footer(footer::FooterView),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = "sponsors".parse::<SectionKind>().unwrap_err();
        assert!(err.to_string().contains("sponsors"));
        assert!(err.to_string().contains("gallery"));
    }
}
