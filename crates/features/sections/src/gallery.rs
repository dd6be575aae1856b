use crate::common::{Heading, HeadingDefaults, Pager, Tab, pager, restore_session, tabs};
use crate::format::{padded_id, photo_count};
use crate::selection::Selection;
use serde::Serialize;
use vinewood_domain::constants::ALL_CATEGORY;
use vinewood_domain::site::{GalleryImage, SiteConfig};
use vinewood_kernel::projection::{
    Prominence, category_counts, filter_by_category, is_all, partition_by, resolve,
};

const HEADING: HeadingDefaults = HeadingDefaults {
    tag: "SnapMatic",
    title: "Media",
    accent: "Gallery",
    subtitle: Some("Captured moments from our server."),
};
/// Featured images shown in the large showcase row.
pub const SHOWCASE_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub heading: Heading,
    pub tabs: Vec<Tab>,
    pub showcase: Vec<ImageCard>,
    /// Everything visible that is not in the showcase, in document order.
    pub grid: Vec<ImageCard>,
    /// `8 Photos • All Categories`
    pub summary: String,
    pub featured_badge: String,
    pub lightbox: Option<Lightbox>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCard {
    pub id: u32,
    /// `IMG #0007`
    pub label: String,
    /// `#0007`
    pub short_label: String,
    pub title: String,
    pub alt: String,
    pub src: String,
    pub category: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lightbox {
    pub image: ImageCard,
    pub pager: Pager<u32>,
}

fn card(image: &GalleryImage, prefix: &str) -> ImageCard {
    let padded = padded_id(image.id);
    ImageCard {
        id: image.id,
        label: format!("{prefix}{padded}"),
        short_label: format!("#{padded}"),
        title: image.title.clone(),
        alt: resolve(image.alt.as_deref(), &image.title),
        src: image.src.clone(),
        category: image.category.clone(),
        featured: image.featured,
    }
}

pub fn project(site: &SiteConfig, selection: &Selection) -> GalleryView {
    let board = &site.gallery;
    let overrides = site.ui.gallery.as_ref();
    let prefix = resolve(overrides.and_then(|o| o.evidence_prefix.as_deref()), "IMG #");
    let category = selection.gallery_category();

    let visible = filter_by_category(&board.images, category);
    let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
    let session = restore_session("gallery", category, selection.image, &ids);

    let parts = partition_by(visible.iter().copied(), |i| Prominence::from_flag(i.featured));
    let showcase: Vec<&GalleryImage> =
        parts.bucket(Prominence::Highlighted).iter().copied().take(SHOWCASE_SIZE).collect();
    let grid = visible
        .iter()
        .filter(|image| !showcase.iter().any(|s| std::ptr::eq(*s, **image)))
        .map(|image| card(image, &prefix))
        .collect();

    // Documents usually list "all" themselves; add it when they don't.
    let mut taxonomy: Vec<(&str, &str)> =
        board.categories.iter().map(|c| (c.id.as_str(), c.name.as_str())).collect();
    if !taxonomy.iter().any(|(id, _)| is_all(id)) {
        taxonomy.insert(0, (ALL_CATEGORY, "All"));
    }

    let scope = if is_all(category) {
        "All Categories".to_owned()
    } else {
        board
            .categories
            .iter()
            .find(|c| c.id == category)
            .map_or_else(|| category.to_owned(), |c| c.name.clone())
    };

    let lightbox = pager(&session, &ids).and_then(|pager| {
        let image = visible.get(pager.position)?;
        Some(Lightbox { image: card(image, &prefix), pager })
    });

    GalleryView {
        heading: Heading::resolve(overrides.map(|o| &o.heading), &HEADING),
        tabs: tabs(category_counts(&board.images, taxonomy), session.category()),
        showcase: showcase.iter().map(|image| card(image, &prefix)).collect(),
        grid,
        summary: format!("{} • {scope}", photo_count(visible.len())),
        featured_badge: resolve(overrides.and_then(|o| o.featured_badge.as_deref()), "Featured"),
        lightbox,
    }
}
