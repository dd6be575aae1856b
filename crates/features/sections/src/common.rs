use serde::Serialize;
use tracing::debug;
use vinewood_domain::site::SectionHeading;
use vinewood_kernel::projection::{CategoryCount, resolve};
use vinewood_kernel::session::DetailSession;

/// Section header block: tag line, two-part title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub tag: String,
    pub title: String,
    pub title_accent: String,
    pub subtitle: Option<String>,
}

pub(crate) struct HeadingDefaults {
    pub(crate) tag: &'static str,
    pub(crate) title: &'static str,
    pub(crate) accent: &'static str,
    pub(crate) subtitle: Option<&'static str>,
}

impl Heading {
    pub(crate) fn resolve(overrides: Option<&SectionHeading>, defaults: &HeadingDefaults) -> Self {
        let pick = |field: fn(&SectionHeading) -> Option<&str>, default: &str| {
            resolve(overrides.and_then(field), default)
        };

        Self {
            tag: pick(|h| h.section_tag.as_deref(), defaults.tag),
            title: pick(|h| h.title.as_deref(), defaults.title),
            title_accent: pick(|h| h.title_accent.as_deref(), defaults.accent),
            subtitle: match defaults.subtitle {
                Some(default) => Some(pick(|h| h.subtitle.as_deref(), default)),
                None => overrides
                    .and_then(|h| h.subtitle.as_deref())
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_owned),
            },
        }
    }
}

/// One filter tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub active: bool,
}

pub(crate) fn tabs(counts: Vec<CategoryCount>, active: &str) -> Vec<Tab> {
    counts
        .into_iter()
        .map(|c| Tab { active: c.id == active, id: c.id, name: c.name, count: c.count })
        .collect()
}

/// Position of an open detail view and the ids of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager<Id> {
    pub position: usize,
    pub total: usize,
    /// `3 / 10`, one-based.
    pub label: String,
    pub previous: Id,
    pub next: Id,
}

pub(crate) fn pager<Id: Clone + PartialEq>(
    session: &DetailSession<Id>,
    visible: &[Id],
) -> Option<Pager<Id>> {
    let position = session.position(visible)?;
    Some(Pager {
        position,
        total: visible.len(),
        label: format!("{} / {}", position + 1, visible.len()),
        previous: session.peek_previous(visible)?,
        next: session.peek_next(visible)?,
    })
}

/// Rebuilds the detail session of one section, noting selections that no longer apply.
pub(crate) fn restore_session<Id>(
    section: &'static str,
    category: &str,
    selected: Option<Id>,
    visible: &[Id],
) -> DetailSession<Id>
where
    Id: Clone + PartialEq + std::fmt::Debug,
{
    let requested = selected.clone();
    let session = DetailSession::restore(category, selected, visible);
    if requested.is_some() && !session.is_open() {
        debug!(section, category, ?requested, "Selected entity is not visible, detail closed");
    }
    session
}
