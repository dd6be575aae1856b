use serde_json::json;
use vinewood_domain::site::{LogoKind, Severity, SiteConfig};
use vinewood_domain::team::{MemberStatus, Role};

#[test]
fn empty_document_is_valid() {
    let site: SiteConfig = serde_json::from_value(json!({})).expect("empty site");
    assert!(site.features.is_empty());
    assert!(site.server.name.is_none());
    assert_eq!(site.api.refresh_interval, 30_000);
}

#[test]
fn severity_defaults_to_low() {
    let site: SiteConfig = serde_json::from_value(json!({
        "rules": [
            { "id": "r1", "title": "No RDM", "severity": "high" },
            { "id": "r2", "title": "No VDM", "severity": "catastrophic" },
            { "id": "r3", "title": "Be nice" }
        ]
    }))
    .expect("rules");

    let bands: Vec<Severity> = site.rules.iter().map(|r| r.severity).collect();
    assert_eq!(bands, [Severity::High, Severity::Low, Severity::Low]);
}

#[test]
fn team_roles_are_tagged_at_load() {
    let site: SiteConfig = serde_json::from_value(json!({
        "team": [
            { "id": "1", "name": "Marcus 'Ghost' Vale", "role": "Server Owner", "status": "active" },
            { "id": "2", "name": "Dana", "role": "Head Admin", "status": "away" },
            { "id": "3", "name": "Kai", "role": "Lead Developer" },
            { "id": "4", "name": "Ivy", "role": "Moderator" },
            { "id": "5", "name": "Sam", "role": "Community Manager" },
            { "id": "6", "name": "Lee", "role": "Helper", "roleTag": "admin" }
        ]
    }))
    .expect("team");

    let ranks: Vec<Role> = site.team.iter().map(|m| m.rank).collect();
    assert_eq!(
        ranks,
        [Role::Owner, Role::Admin, Role::Developer, Role::Moderator, Role::Other, Role::Admin]
    );
    assert_eq!(site.team[0].status, MemberStatus::Active);
    assert_eq!(site.team[1].status, MemberStatus::Other);
    assert!(site.team[0].is_active());
}

#[test]
fn role_classification_prefers_earlier_keywords() {
    assert_eq!(Role::classify("Owner & Developer"), Role::Owner);
    assert_eq!(Role::classify("ADMIN"), Role::Admin);
    assert_eq!(Role::classify("dev ops"), Role::Developer);
    assert_eq!(Role::classify(""), Role::Other);
}

#[test]
fn team_member_round_trips_its_tag() {
    let site: SiteConfig = serde_json::from_value(json!({
        "team": [{ "id": "1", "name": "Lee", "role": "Helper", "roleTag": "moderator" }]
    }))
    .expect("team");

    let raw = serde_json::to_value(&site.team[0]).expect("serialize");
    assert_eq!(raw["roleTag"], "moderator");
}

#[test]
fn logo_kind_falls_back_to_image() {
    let site: SiteConfig = serde_json::from_value(json!({
        "server": { "logo": { "type": "svg", "content": "/logo.svg" } }
    }))
    .expect("logo");

    assert_eq!(site.server.logo.map(|l| l.kind), Some(LogoKind::Image));
}

#[test]
fn flattened_headings_deserialize() {
    let site: SiteConfig = serde_json::from_value(json!({
        "ui": { "jobs": { "title": "Earn Your", "applyButtonText": "Apply" } }
    }))
    .expect("ui");

    let jobs = site.ui.jobs.expect("jobs strings");
    assert_eq!(jobs.heading.title.as_deref(), Some("Earn Your"));
    assert_eq!(jobs.apply_button_text.as_deref(), Some("Apply"));
}
