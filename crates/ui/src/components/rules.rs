use dioxus::prelude::*;
use vinewood_domain::constants::RULES;
use vinewood_sections::Selection;
use vinewood_sections::rules::{RuleBand, RuleDetail, RulesView};

use super::common::{PagerControls, SectionHeader, TabStrip};
use crate::links::{PagerLinks, page_link, tab_links};

#[component]
pub(crate) fn Rules(view: RulesView, selection: Selection) -> Element {
    let tabs = tab_links(&view.tabs, RULES, |id| selection.with_rules(id));

    rsx! {
        section { id: RULES, class: "rules",
            SectionHeader { heading: view.heading.clone() }
            TabStrip { tabs }
            if view.bands.is_empty() {
                p { class: "empty", "No rules in this category." }
            }
            for band in view.bands.iter() {
                SeverityBand { band: band.clone(), selection: selection.clone() }
            }
            if let Some(detail) = &view.detail {
                RuleModal { detail: detail.clone(), selection: selection.clone() }
            }
            footer { class: "rules-footer",
                p { "{view.footer}" }
                small { "{view.footer_note}" }
            }
        }
    }
}

#[component]
fn SeverityBand(band: RuleBand, selection: Selection) -> Element {
    rsx! {
        div { class: "rule-band tone-{band.tone}",
            header {
                h3 { "{band.label}" }
                span { class: "rule-band-sublabel", "{band.sublabel}" }
            }
            ol {
                for rule in band.rules.iter() {
                    li { class: if rule.selected { "rule selected" } else { "rule" },
                        a { href: page_link(&selection.with_rule(Some(&rule.id)), RULES),
                            span { class: "rule-number", "{rule.number}" }
                            h4 { "{rule.title}" }
                            span { class: "rule-reference", "{rule.reference}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RuleModal(detail: RuleDetail, selection: Selection) -> Element {
    let pager = &detail.pager;
    let links = PagerLinks {
        label: pager.label.clone(),
        previous: page_link(&selection.with_rule(Some(&pager.previous)), RULES),
        next: page_link(&selection.with_rule(Some(&pager.next)), RULES),
        close: page_link(&selection.with_rule(None), RULES),
    };
    let card = &detail.card;

    rsx! {
        div { class: "modal rule-detail tone-{detail.tone}", "role": "dialog",
            span { class: "rule-reference", "{card.reference}" }
            h3 { "{card.title}" }
            p { "{card.description}" }
            span { class: "rule-category", "{card.category}" }
            PagerControls { links }
        }
    }
}
