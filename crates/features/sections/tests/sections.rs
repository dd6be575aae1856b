use vinewood_domain::site::{Severity, SiteConfig};
use vinewood_domain::status::ServerStatus;
use vinewood_domain::team::Role;
use vinewood_sections::{
    PageContext, SectionKind, SectionView, Selection, SiteView, features, footer, gallery, hero,
    jobs, rules, team,
};

fn fixture() -> SiteConfig {
    serde_json::from_str(include_str!("fixtures/site.json")).expect("fixture parses")
}

fn selection(query: &[(&str, &str)]) -> Selection {
    let mut s = Selection::default();
    for (key, value) in query {
        let value = Some((*value).to_owned());
        match *key {
            "jobs" => s.jobs = value,
            "job" => s.job = value,
            "rules" => s.rules = value,
            "rule" => s.rule = value,
            "gallery" => s.gallery = value,
            "image" => s.image = value.and_then(|v| v.parse().ok()),
            _ => unreachable!("unknown key {key}"),
        }
    }
    s
}

#[test]
fn features_split_by_highlight_in_order() {
    let view = features::project(&fixture());

    let highlighted: Vec<&str> = view.highlighted.iter().map(|f| f.id.as_str()).collect();
    let regular: Vec<&str> = view.regular.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(highlighted, ["eco", "gangs"]);
    assert_eq!(regular, ["cars", "housing", "phone"]);

    assert_eq!(view.highlighted[1].number.as_deref(), Some("02"));
    assert_eq!(view.regular[0].number, None);
    assert_eq!(view.regular[0].icon, "Box");
    assert_eq!(view.banner, "128+ Players • Custom Scripts • Premium Experience");
}

#[test]
fn jobs_tabs_skip_empty_categories() {
    let view = jobs::project(&fixture(), &Selection::default());

    let tabs: Vec<(&str, usize)> = view.tabs.iter().map(|t| (t.id.as_str(), t.count)).collect();
    assert_eq!(tabs, [("all", 5), ("legal", 1), ("emergency", 2), ("criminal", 1)]);
    assert_eq!(view.tabs[0].name, "All Jobs");
    assert!(view.tabs[0].active);
}

#[test]
fn jobs_cards_resolve_category_and_salary() {
    let view = jobs::project(&fixture(), &Selection::default());

    let heist = view.cards.iter().find(|c| c.id == "heist").expect("heist");
    assert_eq!(heist.salary, "$12,500");
    assert!(!heist.legal);

    let taxi = view.cards.iter().find(|c| c.id == "taxi").expect("taxi");
    assert_eq!(taxi.category, "Unknown");
    assert!(taxi.legal);

    let lspd = view.cards.iter().find(|c| c.id == "lspd").expect("lspd");
    assert_eq!(lspd.requirements, ["18+", "Clean record"]);

    assert_eq!(view.heading.title, "Earn Your");
    assert_eq!(view.heading.title_accent, "Living");
    assert_eq!(view.apply.text, "Apply Now");
    assert_eq!(view.apply.url, "https://discord.gg/vinewood");
    assert_eq!(view.stats.salary_range.as_deref(), Some("$800-$12500"));
    assert_eq!(view.stats.categories, 4);
}

#[test]
fn jobs_filter_and_detail() {
    let view = jobs::project(&fixture(), &selection(&[("jobs", "emergency"), ("job", "ems")]));

    let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["lspd", "ems"]);

    let detail = view.detail.expect("detail open");
    assert_eq!(detail.card.id, "ems");
    assert_eq!(detail.pager.label, "2 / 2");
    assert_eq!(detail.pager.next, "lspd");
    assert_eq!(detail.pager.previous, "lspd");
    assert!(view.cards[1].selected);
}

#[test]
fn jobs_detail_outside_filter_is_closed() {
    let view = jobs::project(&fixture(), &selection(&[("jobs", "criminal"), ("job", "ems")]));
    assert!(view.detail.is_none());
    assert!(view.cards.iter().all(|c| !c.selected));
}

#[test]
fn unknown_category_yields_empty_listing() {
    let view = jobs::project(&fixture(), &selection(&[("jobs", "pilots")]));
    assert!(view.cards.is_empty());
    assert!(view.tabs.iter().all(|t| !t.active));
}

#[test]
fn empty_board_has_no_salary_range() {
    let view = jobs::project(&SiteConfig::default(), &Selection::default());
    assert_eq!(view.stats.salary_range, None);
    assert_eq!(view.stats.total_jobs, 0);
}

#[test]
fn rules_band_by_severity() {
    let view = rules::project(&fixture(), &Selection::default());

    let bands: Vec<(Severity, Vec<&str>)> = view
        .bands
        .iter()
        .map(|b| (b.severity, b.rules.iter().map(|r| r.id.as_str()).collect()))
        .collect();
    assert_eq!(
        bands,
        [
            (Severity::High, vec!["rdm", "vdm"]),
            (Severity::Medium, vec!["meta"]),
            (Severity::Low, vec!["mic", "fear", "ooc"]),
        ]
    );

    assert_eq!(view.bands[0].label, "Bannable");
    assert_eq!(view.bands[1].label, "Important Rules");
    assert_eq!(view.bands[2].sublabel, "Best Practices");
    assert_eq!(view.bands[0].rules[1].number, "02");
    assert_eq!(view.bands[0].rules[1].reference, "#VDM");
    assert_eq!(view.footer, "Ignorance is Not an Excuse");

    let tabs: Vec<&str> = view.tabs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(tabs, ["all", "combat", "roleplay", "general"]);
}

#[test]
fn rules_filter_drops_empty_bands() {
    let view = rules::project(&fixture(), &selection(&[("rules", "combat")]));
    assert_eq!(view.bands.len(), 1);
    assert_eq!(view.bands[0].severity, Severity::High);
}

#[test]
fn rule_detail_follows_display_order() {
    let view = rules::project(&fixture(), &selection(&[("rule", "vdm")]));

    let detail = view.detail.expect("detail open");
    assert_eq!(detail.card.number, "02");
    assert_eq!(detail.pager.previous, "rdm");
    assert_eq!(detail.pager.next, "meta");
    assert_eq!(detail.pager.label, "2 / 6");
}

#[test]
fn team_sorted_by_rank() {
    let view = team::project(&fixture());

    let order: Vec<(&str, Role)> = view.members.iter().map(|m| (m.id.as_str(), m.rank)).collect();
    assert_eq!(
        order,
        [
            ("t3", Role::Owner),
            ("t5", Role::Admin),
            ("t2", Role::Developer),
            ("t4", Role::Moderator),
            ("t6", Role::Moderator),
            ("t1", Role::Other),
        ]
    );

    let owner = &view.members[0];
    assert_eq!(owner.first_name, "Marcus");
    assert_eq!(owner.nickname.as_deref(), Some("Ghost"));
    assert_eq!(owner.tone, "yellow");
    assert_eq!(owner.icon, "Crown");
    assert_eq!(view.members[3].status_label, "Offline");
    assert_eq!(view.join.button, "Apply on Discord");
}

#[test]
fn gallery_showcase_caps_at_two() {
    let view = gallery::project(&fixture(), &Selection::default());

    let showcase: Vec<u32> = view.showcase.iter().map(|i| i.id).collect();
    let grid: Vec<u32> = view.grid.iter().map(|i| i.id).collect();
    assert_eq!(showcase, [1, 4]);
    assert_eq!(grid, [2, 3, 5, 6, 7, 8, 9, 10]);
    assert_eq!(view.summary, "10 Photos • All Categories");
    assert_eq!(view.showcase[0].label, "IMG #0001");
    assert_eq!(view.showcase[1].alt, "Del Perro pier at night");
    assert_eq!(view.grid[0].alt, "Downtown");
}

#[test]
fn gallery_grid_keeps_duplicate_ids() {
    let site: SiteConfig = serde_json::from_str(
        r#"{ "gallery": { "images": [
            { "id": 1, "title": "Showcase", "src": "/a.jpg", "featured": true },
            { "id": 1, "title": "Twin", "src": "/b.jpg" },
            { "id": 3, "title": "Second", "src": "/c.jpg", "featured": true },
            { "id": 4, "title": "Overflow", "src": "/d.jpg", "featured": true }
        ] } }"#,
    )
    .expect("site parses");
    let view = gallery::project(&site, &Selection::default());

    let showcase: Vec<&str> = view.showcase.iter().map(|i| i.title.as_str()).collect();
    let grid: Vec<&str> = view.grid.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(showcase, ["Showcase", "Second"]);
    assert_eq!(grid, ["Twin", "Overflow"]);
}

#[test]
fn gallery_category_filter_and_lightbox() {
    let view = gallery::project(&fixture(), &selection(&[("gallery", "cars"), ("image", "1")]));

    let showcase: Vec<u32> = view.showcase.iter().map(|i| i.id).collect();
    let grid: Vec<u32> = view.grid.iter().map(|i| i.id).collect();
    assert_eq!(showcase, [1, 7]);
    assert_eq!(grid, [3, 5, 9]);
    assert_eq!(view.summary, "5 Photos • Car Meets");

    let tabs: Vec<(&str, usize, bool)> =
        view.tabs.iter().map(|t| (t.id.as_str(), t.count, t.active)).collect();
    assert_eq!(tabs, [("all", 10, false), ("cars", 5, true), ("city", 5, false)]);

    let lightbox = view.lightbox.expect("lightbox");
    assert_eq!(lightbox.pager.label, "1 / 5");
    assert_eq!(lightbox.pager.previous, 9);
    assert_eq!(lightbox.pager.next, 3);
}

#[test]
fn gallery_adds_all_tab_when_missing() {
    let mut site = fixture();
    site.gallery.categories.retain(|c| c.id != "all");
    let view = gallery::project(&site, &selection(&[("image", "42")]));

    assert_eq!(view.tabs[0].id, "all");
    assert_eq!(view.tabs[0].count, 10);
    assert!(view.lightbox.is_none());
}

#[test]
fn single_photo_summary() {
    let mut site = fixture();
    site.gallery.images.truncate(1);
    let view = gallery::project(&site, &Selection::default());
    assert_eq!(view.summary, "1 Photo • All Categories");
}

#[test]
fn footer_fallback_chain() {
    let view = footer::project(&fixture(), 2026);

    assert_eq!(view.brand, "VINEWOOD");
    assert_eq!(view.address.as_deref(), Some("51.77.20.14:30120"));
    assert_eq!(view.established, "Est. 2021");
    assert_eq!(view.copyright, "© 2026 Vinewood Nights RP. All rights reserved.");
    assert_eq!(view.disclaimer, "Fan project, not affiliated with Rockstar.");
    assert_eq!(view.play_url.as_deref(), Some("fivem://connect/x7k2pq"));

    let socials: Vec<&str> = view.socials.iter().map(|s| s.name).collect();
    assert_eq!(socials, ["Discord", "Youtube"]);

    let stats: Vec<(&str, &str)> =
        view.stats.iter().map(|s| (s.label.as_str(), s.value.as_str())).collect();
    assert_eq!(stats, [("Players", "22K+"), ("Gangs", "9"), ("Businesses", "45+")]);
}

#[test]
fn footer_defaults_on_empty_document() {
    let view = footer::project(&SiteConfig::default(), 2025);
    assert_eq!(view.brand, "Los Santos RP");
    assert_eq!(view.disclaimer, "Not affiliated with Rockstar Games");
    assert_eq!(view.copyright, "© 2025 Los Santos RP. All rights reserved.");
    assert!(view.socials.is_empty());
    assert_eq!(view.navigation[1].href, "#jobs");
}

#[test]
fn hero_reflects_status_and_document() {
    let view = hero::project(&fixture(), ServerStatus::live(37));
    assert_eq!(view.status.players, "37/128");
    assert_eq!(view.active_jobs, "5");
    assert_eq!(view.title.last().map(|w| w.text.as_str()), Some("RP"));
    assert_eq!(view.loading.tips.len(), 2);
}

#[test]
fn single_section_matches_full_view() {
    let site = fixture();
    let sel = selection(&[("gallery", "city")]);
    let ctx = PageContext { site: &site, status: ServerStatus::default(), year: 2026, selection: &sel };

    let full = SiteView::project(&ctx);
    let SectionView::Gallery(only) = SectionKind::Gallery.project(&ctx) else {
        panic!("expected gallery view");
    };
    assert_eq!(full.gallery, only);

    let json = serde_json::to_value(SectionKind::Rules.project(&ctx)).expect("serialize");
    assert!(json.get("bands").is_some());
}
