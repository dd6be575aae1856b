mod common;
mod features;
mod footer;
mod gallery;
mod hero;
mod jobs;
mod navigation;
mod rules;
mod team;

use dioxus::prelude::*;
use vinewood_sections::{Selection, SiteView};

#[derive(Props, Clone, PartialEq)]
pub(crate) struct PageProps {
    pub(crate) view: SiteView,
    pub(crate) selection: Selection,
}

/// Body content of the landing page.
#[allow(non_snake_case)]
pub(crate) fn Page(props: PageProps) -> Element {
    let PageProps { view, selection } = props;

    rsx! {
        hero::LoadingOverlay { screen: view.hero.loading.clone() }
        navigation::NavigationBar { view: view.navigation.clone() }
        main {
            hero::Hero { view: view.hero.clone() }
            features::Features { view: view.features.clone() }
            jobs::Jobs { view: view.jobs.clone(), selection: selection.clone() }
            rules::Rules { view: view.rules.clone(), selection: selection.clone() }
            team::Team { view: view.team.clone() }
            gallery::Gallery { view: view.gallery.clone(), selection: selection.clone() }
        }
        footer::Footer { view: view.footer.clone() }
    }
}

#[derive(Props, Clone, PartialEq)]
pub(crate) struct TitleProps {
    pub(crate) title: String,
}

/// Escaped document title text.
#[allow(non_snake_case)]
pub(crate) fn DocumentTitle(props: TitleProps) -> Element {
    let TitleProps { title } = props;
    rsx! { "{title}" }
}
