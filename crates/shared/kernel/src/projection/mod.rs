//! Projection primitives shared by every section.
//!
//! All functions here are pure: they borrow the site document, never mutate it,
//! and never fail. A category id that matches nothing yields an empty view, and
//! an absent override yields the section default.

mod fallback;
mod filter;
mod partition;

pub use fallback::{resolve, resolve_chain};
pub use filter::{
    Categorized, CategoryCount, category_counts, distinct_categories, filter_by_category, is_all,
};
pub use partition::{Band, Partition, Prominence, partition_by};
