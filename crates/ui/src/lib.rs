//! HTML rendering of the projected page.
//!
//! Components are plain Dioxus functions rendered once on the server through
//! `dioxus-ssr`. They only lay out what the section projectors produced; every
//! string has already been resolved and every filter applied. Interactions are
//! ordinary links that carry the visitor's selection in the query string.

mod components;
mod links;

use components::{DocumentTitle, Page, PageProps, TitleProps};
use dioxus::prelude::VirtualDom;
use vinewood_sections::{Selection, SiteView};

const HEAD: &str =
    r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">"#;

/// Renders the complete document, doctype included.
///
/// The document shell is fixed markup; the title and body go through the renderer
/// so every piece of site text is escaped.
pub fn render_page(view: SiteView, selection: Selection) -> String {
    let mut title = VirtualDom::new_with_props(
        DocumentTitle,
        TitleProps { title: view.footer.brand.clone() },
    );
    title.rebuild_in_place();

    let mut body = VirtualDom::new_with_props(Page, PageProps { view, selection });
    body.rebuild_in_place();

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>{HEAD}<title>{}</title></head><body>{}</body></html>",
        dioxus_ssr::render(&title),
        dioxus_ssr::render(&body),
    )
}
