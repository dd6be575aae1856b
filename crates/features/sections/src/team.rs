use crate::common::{Heading, HeadingDefaults};
use crate::format::{first_name, nickname};
use serde::Serialize;
use vinewood_domain::site::SiteConfig;
use vinewood_domain::team::{Role, TeamMember};
use vinewood_kernel::projection::{partition_by, resolve};

const HEADING: HeadingDefaults = HeadingDefaults {
    tag: "The Crew",
    title: "The",
    accent: "Team",
    subtitle: Some("The ones who keep the server running smoothly."),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub heading: Heading,
    /// Ordered by rank, roster order within a rank.
    pub members: Vec<MemberCard>,
    pub join: JoinCallout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    pub id: String,
    pub first_name: String,
    pub nickname: Option<String>,
    pub role: String,
    pub rank: Role,
    /// Colour hint derived from the rank.
    pub tone: &'static str,
    /// Icon name hint derived from the rank.
    pub icon: &'static str,
    pub badge: Option<String>,
    pub avatar: Option<String>,
    pub discord: Option<String>,
    pub active: bool,
    /// `Active` or `Offline`.
    pub status_label: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinCallout {
    pub title: String,
    pub subtitle: String,
    pub button: String,
    pub url: String,
}

const fn tone(rank: Role) -> &'static str {
    match rank {
        Role::Owner => "yellow",
        Role::Admin => "red",
        Role::Developer => "blue",
        Role::Moderator | Role::Other => "green",
    }
}

const fn icon(rank: Role) -> &'static str {
    match rank {
        Role::Owner => "Crown",
        Role::Admin => "Shield",
        Role::Developer => "Wrench",
        Role::Moderator | Role::Other => "Users",
    }
}

impl MemberCard {
    fn new(member: &TeamMember) -> Self {
        let active = member.is_active();
        Self {
            id: member.id.clone(),
            first_name: first_name(&member.name).to_owned(),
            nickname: nickname(&member.name).map(str::to_owned),
            role: member.role.clone(),
            rank: member.rank,
            tone: tone(member.rank),
            icon: icon(member.rank),
            badge: member.badge.clone(),
            avatar: member.avatar.clone(),
            discord: member.discord.clone(),
            active,
            status_label: if active { "Active" } else { "Offline" },
            description: member.description.clone(),
        }
    }
}

pub fn project(site: &SiteConfig) -> TeamView {
    let overrides = site.ui.team.as_ref();
    let members = partition_by(&site.team, |m| m.rank).flatten().into_iter().map(MemberCard::new).collect();

    TeamView {
        heading: Heading::resolve(overrides.map(|o| &o.heading), &HEADING),
        members,
        join: JoinCallout {
            title: resolve(overrides.and_then(|o| o.join_title.as_deref()), "Join The Team"),
            subtitle: resolve(
                overrides.and_then(|o| o.join_subtitle.as_deref()),
                "Think you got what it takes?",
            ),
            button: resolve(overrides.and_then(|o| o.join_button.as_deref()), "Apply on Discord"),
            url: resolve(site.social.discord.as_deref(), "#"),
        },
    }
}
