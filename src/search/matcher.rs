//! Plain substring filter over the aggregated corpus.
//!
//! No ranking: hits come back in corpus order. Used by the CLI when no
//! external engine is involved.

use crate::library::ContentItem;

use super::results::SearchResult;

/// Whether `item` matches `query` (case-insensitive substring)
pub fn matches(item: &ContentItem, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    item.title.to_lowercase().contains(&query_lower)
        || item.description.to_lowercase().contains(&query_lower)
        || item.category.to_lowercase().contains(&query_lower)
        || item.tags.iter().any(|t| t.to_lowercase().contains(&query_lower))
}

/// Filter `items`, wrapping each hit with its index into `items`
pub fn filter(items: &[ContentItem], query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item, query))
        .map(|(i, item)| SearchResult::wrapped(item.clone(), i))
        .collect()
}
