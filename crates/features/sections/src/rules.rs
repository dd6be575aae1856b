use crate::common::{Heading, HeadingDefaults, Pager, Tab, pager, restore_session, tabs};
use crate::format::ordinal;
use crate::selection::Selection;
use serde::Serialize;
use vinewood_domain::site::{Rule, Severity, SeverityLabels, SiteConfig};
use vinewood_kernel::projection::{
    category_counts, distinct_categories, filter_by_category, partition_by, resolve,
};

const HEADING: HeadingDefaults = HeadingDefaults {
    tag: "Server Regulations",
    title: "Know The",
    accent: "Rules",
    subtitle: Some("Break these and face the consequences. We run a tight ship here."),
};
const FOOTER: &str = "Ignorance is Not an Excuse";
const FOOTER_NOTE: &str = "All rules are enforced strictly";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesView {
    pub heading: Heading,
    pub tabs: Vec<Tab>,
    /// Non-empty bands only, highest severity first.
    pub bands: Vec<RuleBand>,
    pub detail: Option<RuleDetail>,
    pub footer: String,
    pub footer_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBand {
    pub severity: Severity,
    pub label: String,
    pub sublabel: &'static str,
    /// Colour hint: `red`, `yellow` or `blue`.
    pub tone: &'static str,
    pub rules: Vec<RuleCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCard {
    pub id: String,
    /// Position inside the band: `01`, `02`, ...
    pub number: String,
    /// `#RDM-01`
    pub reference: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetail {
    pub card: RuleCard,
    pub severity: Severity,
    pub tone: &'static str,
    pub pager: Pager<String>,
}

fn band_label(severity: Severity, labels: Option<&SeverityLabels>) -> String {
    match severity {
        Severity::High => resolve(labels.and_then(|l| l.high.as_deref()), "Critical Violations"),
        Severity::Medium => resolve(labels.and_then(|l| l.medium.as_deref()), "Important Rules"),
        Severity::Low => resolve(labels.and_then(|l| l.low.as_deref()), "General Guidelines"),
    }
}

const fn band_sublabel(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Instant Ban Offenses",
        Severity::Medium => "Warning System Applies",
        Severity::Low => "Best Practices",
    }
}

const fn band_tone(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "blue",
    }
}

fn card(rule: &Rule, index: usize, selected: bool) -> RuleCard {
    RuleCard {
        id: rule.id.clone(),
        number: ordinal(index),
        reference: format!("#{}", rule.id.to_uppercase()),
        title: rule.title.clone(),
        description: rule.description.clone(),
        category: rule.category.clone(),
        selected,
    }
}

pub fn project(site: &SiteConfig, selection: &Selection) -> RulesView {
    let overrides = site.ui.rules.as_ref();
    let labels = overrides.and_then(|o| o.severity_labels.as_ref());
    let category = selection.rules_category();

    let visible = filter_by_category(&site.rules, category);
    let parts = partition_by(visible.iter().copied(), |r| r.severity);

    // Navigation follows display order: band by band.
    let ordered = parts.flatten();
    let ids: Vec<String> = ordered.iter().map(|r| r.id.clone()).collect();
    let session = restore_session("rules", category, selection.rule.clone(), &ids);
    let is_selected = |rule: &Rule| session.selected() == Some(&rule.id);

    let bands = parts
        .iter()
        .filter(|(_, rules)| !rules.is_empty())
        .map(|(severity, rules)| RuleBand {
            severity,
            label: band_label(severity, labels),
            sublabel: band_sublabel(severity),
            tone: band_tone(severity),
            rules: rules.iter().enumerate().map(|(i, r)| card(r, i, is_selected(*r))).collect(),
        })
        .collect();

    let detail = pager(&session, &ids).and_then(|pager| {
        let rule = ordered.get(pager.position)?;
        let index = parts.bucket(rule.severity).iter().position(|r| r.id == rule.id)?;
        Some(RuleDetail {
            card: card(rule, index, true),
            severity: rule.severity,
            tone: band_tone(rule.severity),
            pager,
        })
    });

    let categories = distinct_categories(&site.rules);
    let counts = category_counts(&site.rules, categories.iter().map(|id| (id.as_str(), id.as_str())));

    RulesView {
        heading: Heading::resolve(overrides.map(|o| &o.heading), &HEADING),
        tabs: tabs(counts, session.category()),
        bands,
        detail,
        footer: resolve(overrides.and_then(|o| o.footer.as_deref()), FOOTER),
        footer_note: FOOTER_NOTE,
    }
}
