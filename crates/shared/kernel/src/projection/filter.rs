use serde::Serialize;
use vinewood_domain::constants::ALL_CATEGORY;
use vinewood_domain::site::{GalleryImage, Job, Rule};

/// Anything tagged with a category id.
pub trait Categorized {
    fn category_id(&self) -> &str;
}

impl Categorized for Job {
    fn category_id(&self) -> &str {
        &self.category
    }
}

impl Categorized for Rule {
    fn category_id(&self) -> &str {
        &self.category
    }
}

impl Categorized for GalleryImage {
    fn category_id(&self) -> &str {
        &self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category_id(&self) -> &str {
        (**self).category_id()
    }
}

/// Whether `selected` is the "no filtering" sentinel.
pub fn is_all(selected: &str) -> bool {
    selected == ALL_CATEGORY
}

/// Stable filter: the items whose category matches `selected`, in input order.
///
/// The `"all"` sentinel keeps every item. An id nothing is tagged with yields an
/// empty vector.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    if is_all(selected) {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category_id() == selected).collect()
}

/// One entry of a category tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Counts items per category, in taxonomy order.
///
/// `categories` yields `(id, name)` pairs. A taxonomy entry whose id is the `"all"`
/// sentinel counts every item.
pub fn category_counts<'c, T, I>(items: &[T], categories: I) -> Vec<CategoryCount>
where
    T: Categorized,
    I: IntoIterator<Item = (&'c str, &'c str)>,
{
    categories
        .into_iter()
        .map(|(id, name)| CategoryCount {
            id: id.to_owned(),
            name: name.to_owned(),
            count: if is_all(id) {
                items.len()
            } else {
                items.iter().filter(|item| item.category_id() == id).count()
            },
        })
        .collect()
}

/// The `"all"` sentinel followed by every distinct category id, in order of first appearance.
pub fn distinct_categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = vec![ALL_CATEGORY.to_owned()];
    for item in items {
        let id = item.category_id();
        if !seen.iter().any(|s| s == id) {
            seen.push(id.to_owned());
        }
    }
    seen
}
