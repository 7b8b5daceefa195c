//! Searchable content library for the portfolio site.
//!
//! # Layout
//!
//! ```text
//! Catalog
//! ├── projects   # authored, immutable
//! ├── hands_on   # authored, immutable
//! └── blog       # empty until BlogLoader replaces it
//! ```
//!
//! The site publishes the blog index as `blog/blog-index.json`; each post
//! links back into `portfolio.html#blog-<folder>`.

pub mod catalog;
pub mod content;
pub mod loader;

pub use catalog::{Catalog, CatalogError};
pub use content::{ContentId, ContentItem, ContentType};
pub use loader::{BlogLoadError, BlogLoader, BlogPost, LoadOutcome};
