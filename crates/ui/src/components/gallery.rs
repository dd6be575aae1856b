use dioxus::prelude::*;
use vinewood_domain::constants::GALLERY;
use vinewood_sections::Selection;
use vinewood_sections::gallery::{GalleryView, ImageCard, Lightbox};

use super::common::{PagerControls, SectionHeader, TabStrip};
use crate::links::{PagerLinks, page_link, tab_links};

#[component]
pub(crate) fn Gallery(view: GalleryView, selection: Selection) -> Element {
    let tabs = tab_links(&view.tabs, GALLERY, |id| selection.with_gallery(id));

    rsx! {
        section { id: GALLERY, class: "gallery",
            SectionHeader { heading: view.heading.clone() }
            TabStrip { tabs }
            p { class: "gallery-summary", "{view.summary}" }
            if !view.showcase.is_empty() {
                div { class: "gallery-showcase",
                    for image in view.showcase.iter() {
                        Thumbnail {
                            card: image.clone(),
                            badge: Some(view.featured_badge.clone()),
                            href: page_link(&selection.with_image(Some(image.id)), GALLERY),
                        }
                    }
                }
            }
            div { class: "gallery-grid",
                for image in view.grid.iter() {
                    Thumbnail {
                        card: image.clone(),
                        badge: None,
                        href: page_link(&selection.with_image(Some(image.id)), GALLERY),
                    }
                }
            }
            if let Some(lightbox) = &view.lightbox {
                LightboxModal { lightbox: lightbox.clone(), selection: selection.clone() }
            }
        }
    }
}

#[component]
fn Thumbnail(card: ImageCard, #[props(!optional)] badge: Option<String>, href: String) -> Element {
    rsx! {
        a { class: if card.featured { "photo featured" } else { "photo" }, href: "{href}",
            img { src: "{card.src}", alt: "{card.alt}" }
            if let Some(badge) = &badge {
                span { class: "photo-badge", "{badge}" }
            }
            span { class: "photo-label", "{card.short_label}" }
            span { class: "photo-title", "{card.title}" }
        }
    }
}

#[component]
fn LightboxModal(lightbox: Lightbox, selection: Selection) -> Element {
    let pager = &lightbox.pager;
    let links = PagerLinks {
        label: pager.label.clone(),
        previous: page_link(&selection.with_image(Some(pager.previous)), GALLERY),
        next: page_link(&selection.with_image(Some(pager.next)), GALLERY),
        close: page_link(&selection.with_image(None), GALLERY),
    };
    let image = &lightbox.image;

    rsx! {
        div { class: "modal lightbox", "role": "dialog",
            img { src: "{image.src}", alt: "{image.alt}" }
            span { class: "photo-label", "{image.label}" }
            h3 { "{image.title}" }
            PagerControls { links }
        }
    }
}
