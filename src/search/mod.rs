//! Search-side helpers: result shapes, grouping, and a basic matcher.
//!
//! Ranking belongs to whatever engine indexes `Catalog::all_searchable_content`;
//! this module only moves items in and out of it.

pub mod matcher;
pub mod results;

pub use results::{group_results_by_type, GroupedResults, SearchResult};
