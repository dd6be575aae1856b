//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the projection primitives every
//! section is built from, and the per-request detail session.
//!
//! ## Filtering
//! ```rust
//! use vinewood_kernel::projection::{Categorized, filter_by_category};
//!
//! struct Shot(&'static str);
//! impl Categorized for Shot {
//!     fn category_id(&self) -> &str { self.0 }
//! }
//!
//! let shots = [Shot("cars"), Shot("city"), Shot("cars")];
//! assert_eq!(filter_by_category(&shots, "cars").len(), 2);
//! assert_eq!(filter_by_category(&shots, "all").len(), 3);
//! assert!(filter_by_category(&shots, "boats").is_empty());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use vinewood_kernel::config::{load_config, load_site};
//! use vinewood_domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("server")).unwrap();
//! let site = load_site(&cfg.site.path).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod projection;
#[cfg(feature = "server")]
pub mod server;
pub mod session;

pub use vinewood_domain as domain;
