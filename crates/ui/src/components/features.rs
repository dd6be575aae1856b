use dioxus::prelude::*;
use vinewood_domain::constants::FEATURES;
use vinewood_sections::features::{FeatureCard, FeaturesView};

use super::common::SectionHeader;

#[component]
pub(crate) fn Features(view: FeaturesView) -> Element {
    rsx! {
        section { id: FEATURES, class: "features",
            SectionHeader { heading: view.heading.clone() }
            if !view.highlighted.is_empty() {
                div { class: "features-highlighted",
                    for card in view.highlighted.iter() {
                        FeatureTile { card: card.clone(), highlighted: true }
                    }
                }
            }
            div { class: "features-grid",
                for card in view.regular.iter() {
                    FeatureTile { card: card.clone(), highlighted: false }
                }
            }
            p { class: "features-banner", "{view.banner}" }
        }
    }
}

#[component]
fn FeatureTile(card: FeatureCard, highlighted: bool) -> Element {
    rsx! {
        article {
            class: if highlighted { "feature feature-highlighted" } else { "feature" },
            "data-icon": "{card.icon}",
            if let Some(number) = &card.number {
                span { class: "feature-number", "{number}" }
            }
            h3 { "{card.title}" }
            p { "{card.description}" }
        }
    }
}
