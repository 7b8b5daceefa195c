//! folio-search - Searchable content index for a static portfolio site
//!
//! Assembles one searchable collection from the authored portfolio table
//! (projects and hands-on labs) plus the site's published blog index, and
//! groups search hits back into per-type buckets for display.
//!
//! # Flow
//!
//! - `BlogLoader` fetches `blog/blog-index.json` and replaces the catalog's blog slot
//! - `Catalog::all_searchable_content` flattens projects, labs and posts
//! - an external engine searches that corpus
//! - `group_results_by_type` splits the hits into projects / hands-on / blog
//!
//! # Modules
//!
//! - `adapters`: Blog index sources (HTTP, local directory)
//! - `library`: Content items, catalog, blog loader
//! - `search`: Result shapes, grouping, substring matcher
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the built site in ./public
//! folio-search --site ./public search kubernetes
//!
//! # Check the live blog index
//! folio-search --site https://portfolio.example/ blog
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod library;
pub mod search;

// Re-export main types at crate root for convenience
pub use adapters::{BlogIndexSource, FileBlogIndex, HttpBlogIndex};
pub use library::{BlogLoadError, BlogLoader, Catalog, ContentId, ContentItem, ContentType, LoadOutcome};
pub use search::{group_results_by_type, GroupedResults, SearchResult};
