use dioxus::prelude::*;
use vinewood_sections::common::Heading;

use crate::links::{PagerLinks, TabLink};

#[component]
pub(crate) fn SectionHeader(heading: Heading) -> Element {
    rsx! {
        header { class: "section-header",
            span { class: "section-tag", "{heading.tag}" }
            h2 { class: "section-title",
                "{heading.title} "
                span { class: "accent", "{heading.title_accent}" }
            }
            if let Some(subtitle) = &heading.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub(crate) fn TabStrip(tabs: Vec<TabLink>) -> Element {
    rsx! {
        nav { class: "tabs",
            for link in tabs.iter() {
                a {
                    class: if link.tab.active { "tab active" } else { "tab" },
                    href: "{link.href}",
                    "{link.tab.name} "
                    span { class: "tab-count", "{link.tab.count}" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn PagerControls(links: PagerLinks) -> Element {
    rsx! {
        div { class: "pager",
            a { class: "pager-previous", href: "{links.previous}", "Previous" }
            span { class: "pager-label", "{links.label}" }
            a { class: "pager-next", href: "{links.next}", "Next" }
            a { class: "pager-close", href: "{links.close}", "Close" }
        }
    }
}
