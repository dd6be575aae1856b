use dioxus::prelude::*;
use vinewood_domain::constants::JOBS;
use vinewood_sections::Selection;
use vinewood_sections::jobs::{JobCard, JobDetail, JobsView};

use super::common::{PagerControls, SectionHeader, TabStrip};
use crate::links::{PagerLinks, page_link, tab_links};

#[component]
pub(crate) fn Jobs(view: JobsView, selection: Selection) -> Element {
    let tabs = tab_links(&view.tabs, JOBS, |id| selection.with_jobs(id));
    let stats = &view.stats;

    rsx! {
        section { id: JOBS, class: "jobs",
            SectionHeader { heading: view.heading.clone() }
            TabStrip { tabs }
            if view.cards.is_empty() {
                p { class: "empty", "No jobs in this category." }
            }
            div { class: "jobs-grid",
                for card in view.cards.iter() {
                    JobTile {
                        card: card.clone(),
                        href: page_link(&selection.with_job(Some(&card.id)), JOBS),
                    }
                }
            }
            if let Some(detail) = &view.detail {
                JobModal { detail: detail.clone(), selection: selection.clone() }
            }
            dl { class: "jobs-stats",
                dt { "{stats.total_jobs_label}" }
                dd { "{stats.total_jobs}" }
                dt { "Categories" }
                dd { "{stats.categories}" }
                if let Some(range) = &stats.salary_range {
                    dt { "{stats.salary_range_label}" }
                    dd { "{range}" }
                }
            }
            a {
                class: "button apply",
                href: "{view.apply.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{view.apply.text}"
            }
        }
    }
}

#[component]
fn JobTile(card: JobCard, href: String) -> Element {
    let class = match (card.selected, card.legal) {
        (true, true) => "job legal selected",
        (true, false) => "job illegal selected",
        (false, true) => "job legal",
        (false, false) => "job illegal",
    };

    rsx! {
        a { class, href: "{href}",
            if let Some(image) = &card.image {
                img { src: "{image}", alt: "{card.name}" }
            }
            span { class: "job-category", "{card.category}" }
            h3 { "{card.name}" }
            p { "{card.description}" }
            span { class: "job-salary", "{card.salary}" }
            ul { class: "job-requirements",
                for requirement in card.requirements.iter() {
                    li { "{requirement}" }
                }
            }
        }
    }
}

#[component]
fn JobModal(detail: JobDetail, selection: Selection) -> Element {
    let pager = &detail.pager;
    let links = PagerLinks {
        label: pager.label.clone(),
        previous: page_link(&selection.with_job(Some(&pager.previous)), JOBS),
        next: page_link(&selection.with_job(Some(&pager.next)), JOBS),
        close: page_link(&selection.with_job(None), JOBS),
    };
    let card = &detail.card;

    rsx! {
        div { class: "modal job-detail", "role": "dialog",
            if let Some(image) = &card.image {
                img { src: "{image}", alt: "{card.name}" }
            }
            span { class: "job-category", "{card.category}" }
            h3 { "{card.name}" }
            p { "{card.description}" }
            span { class: "job-salary", "{card.salary}" }
            h4 { "Requirements" }
            ul {
                for requirement in detail.requirements.iter() {
                    li { "{requirement}" }
                }
            }
            PagerControls { links }
        }
    }
}
