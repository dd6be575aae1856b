use dioxus::prelude::*;
use vinewood_domain::constants::TEAM;
use vinewood_sections::team::{MemberCard, TeamView};

use super::common::SectionHeader;

#[component]
pub(crate) fn Team(view: TeamView) -> Element {
    rsx! {
        section { id: TEAM, class: "team",
            SectionHeader { heading: view.heading.clone() }
            div { class: "team-grid",
                for member in view.members.iter() {
                    Member { card: member.clone() }
                }
            }
            aside { class: "team-join",
                h3 { "{view.join.title}" }
                p { "{view.join.subtitle}" }
                a {
                    class: "button discord",
                    href: "{view.join.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{view.join.button}"
                }
            }
        }
    }
}

#[component]
fn Member(card: MemberCard) -> Element {
    rsx! {
        article { class: "member tone-{card.tone}", "data-icon": "{card.icon}",
            if let Some(avatar) = &card.avatar {
                img { class: "member-avatar", src: "{avatar}", alt: "{card.first_name}" }
            }
            h3 {
                "{card.first_name}"
                if let Some(nickname) = &card.nickname {
                    span { class: "member-nickname", " \"{nickname}\"" }
                }
            }
            span { class: "member-role", "{card.role}" }
            if let Some(badge) = &card.badge {
                span { class: "member-badge", "{badge}" }
            }
            span { class: if card.active { "member-status active" } else { "member-status" },
                "{card.status_label}"
            }
            p { "{card.description}" }
            if let Some(discord) = &card.discord {
                span { class: "member-discord", "{discord}" }
            }
        }
    }
}
