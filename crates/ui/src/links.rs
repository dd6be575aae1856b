use vinewood_sections::Selection;
use vinewood_sections::common::Tab;

/// Link to the page with `selection` applied, scrolled to the section `anchor`.
pub(crate) fn page_link(selection: &Selection, anchor: &str) -> String {
    format!("/{}#{anchor}", selection.to_query())
}

/// A category tab together with the link that activates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabLink {
    pub(crate) tab: Tab,
    pub(crate) href: String,
}

pub(crate) fn tab_links(
    tabs: &[Tab],
    anchor: &str,
    select: impl Fn(&str) -> Selection,
) -> Vec<TabLink> {
    tabs.iter()
        .map(|tab| TabLink { href: page_link(&select(&tab.id), anchor), tab: tab.clone() })
        .collect()
}

/// Links of a detail pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagerLinks {
    pub(crate) label: String,
    pub(crate) previous: String,
    pub(crate) next: String,
    pub(crate) close: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_keep_the_selection() {
        let selection = Selection::default().with_jobs("legal");
        assert_eq!(page_link(&selection, "jobs"), "/?jobs=legal#jobs");
        assert_eq!(page_link(&Selection::default(), "home"), "/#home");
    }

    #[test]
    fn tab_links_switch_category() {
        let tabs = vec![
            Tab { id: "all".into(), name: "All".into(), count: 3, active: true },
            Tab { id: "cars".into(), name: "Cars".into(), count: 1, active: false },
        ];
        let base = Selection::default().with_image(Some(4));
        let links = tab_links(&tabs, "gallery", |id| base.with_gallery(id));

        assert_eq!(links[0].href, "/?gallery=all#gallery");
        assert_eq!(links[1].href, "/?gallery=cars#gallery");
    }
}
