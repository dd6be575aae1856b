//! Section projectors.
//!
//! Each section module exposes a `project` function: a pure mapping from the
//! site document (plus, where the section has one, the visitor's [`Selection`])
//! to a serializable view model. Every user-facing string is resolved here,
//! override first and default second, so renderers never deal with `Option`s
//! of configuration.
//!
//! ```rust
//! use vinewood_domain::site::SiteConfig;
//! use vinewood_sections::features;
//!
//! let view = features::project(&SiteConfig::default());
//! assert_eq!(view.heading.tag, "Server Features");
//! assert!(view.highlighted.is_empty());
//! ```

pub mod common;
mod error;
pub mod features;
pub mod footer;
pub mod format;
pub mod gallery;
pub mod hero;
pub mod jobs;
pub mod navigation;
pub mod rules;
mod selection;
pub mod team;
mod view;

pub use crate::error::SectionError;
pub use crate::selection::Selection;
pub use crate::view::{PageContext, SectionKind, SectionView, SiteView};
