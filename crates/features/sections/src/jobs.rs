use crate::common::{Heading, HeadingDefaults, Pager, Tab, pager, restore_session, tabs};
use crate::format::dollars;
use crate::selection::Selection;
use serde::Serialize;
use vinewood_domain::constants::ALL_CATEGORY;
use vinewood_domain::site::{Job, JobCategory, SiteConfig};
use vinewood_kernel::projection::{category_counts, filter_by_category, resolve};

const HEADING: HeadingDefaults = HeadingDefaults {
    tag: "Career Opportunities",
    title: "Make Your",
    accent: "Living",
    subtitle: Some("Choose your path in Los Santos. Legal or illegal, the choice is yours."),
};
const ALL_TAB_NAME: &str = "All Jobs";
const UNKNOWN_CATEGORY: &str = "Unknown";
const CARD_REQUIREMENTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsView {
    pub heading: Heading,
    pub tabs: Vec<Tab>,
    pub cards: Vec<JobCard>,
    pub detail: Option<JobDetail>,
    pub apply: ApplyLink,
    pub stats: JobStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub legal: bool,
    /// `$12,500`
    pub salary: String,
    /// At most the first two requirements.
    pub requirements: Vec<String>,
    pub image: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub card: JobCard,
    pub requirements: Vec<String>,
    pub pager: Pager<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total_jobs: usize,
    pub total_jobs_label: String,
    pub categories: usize,
    /// `$min-$max`; absent for an empty board.
    pub salary_range: Option<String>,
    pub salary_range_label: String,
}

fn card(job: &Job, categories: &[JobCategory], selected: bool) -> JobCard {
    let category = categories.iter().find(|c| c.id == job.category);
    JobCard {
        id: job.id.clone(),
        name: job.name.clone(),
        description: job.description.clone(),
        category: resolve(category.map(|c| c.name.as_str()), UNKNOWN_CATEGORY),
        legal: category.and_then(|c| c.legal).unwrap_or(true),
        salary: dollars(job.salary),
        requirements: job.requirements.iter().take(CARD_REQUIREMENTS).cloned().collect(),
        image: job.image.clone(),
        selected,
    }
}

/// Lowest and highest salary as `$min-$max`, without separators.
pub fn salary_range(jobs: &[Job]) -> Option<String> {
    let min = jobs.iter().map(|j| j.salary).min()?;
    let max = jobs.iter().map(|j| j.salary).max()?;
    Some(format!("${min}-${max}"))
}

pub fn project(site: &SiteConfig, selection: &Selection) -> JobsView {
    let board = &site.jobs;
    let overrides = site.ui.jobs.as_ref();
    let category = selection.jobs_category();

    let visible = filter_by_category(&board.list, category);
    let ids: Vec<String> = visible.iter().map(|j| j.id.clone()).collect();
    let session = restore_session("jobs", category, selection.job.clone(), &ids);

    // Synthetic "all" tab first, then only categories that have jobs.
    let taxonomy = std::iter::once((ALL_CATEGORY, ALL_TAB_NAME))
        .chain(board.categories.iter().map(|c| (c.id.as_str(), c.name.as_str())));
    let counts = category_counts(&board.list, taxonomy)
        .into_iter()
        .filter(|c| c.id == ALL_CATEGORY || c.count > 0)
        .collect();

    let cards: Vec<JobCard> = visible
        .iter()
        .map(|job| card(job, &board.categories, session.selected() == Some(&job.id)))
        .collect();

    let detail = pager(&session, &ids).and_then(|pager| {
        let job = visible.get(pager.position)?;
        Some(JobDetail {
            card: card(job, &board.categories, true),
            requirements: job.requirements.clone(),
            pager,
        })
    });

    JobsView {
        heading: Heading::resolve(overrides.map(|o| &o.heading), &HEADING),
        tabs: tabs(counts, session.category()),
        cards,
        detail,
        apply: ApplyLink {
            text: resolve(overrides.and_then(|o| o.apply_button_text.as_deref()), "Apply Now"),
            url: resolve(site.social.discord.as_deref(), "#"),
        },
        stats: JobStats {
            total_jobs: board.list.len(),
            total_jobs_label: resolve(
                overrides.and_then(|o| o.total_jobs_label.as_deref()),
                "Total Jobs",
            ),
            categories: board.categories.len(),
            salary_range: salary_range(&board.list),
            salary_range_label: resolve(
                overrides.and_then(|o| o.salary_range_label.as_deref()),
                "Salary Range",
            ),
        },
    }
}
