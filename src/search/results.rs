//! Search results and grouping by content type.

use serde::{Deserialize, Serialize};

use crate::library::{ContentItem, ContentType};

/// One hit returned by a search engine
///
/// Fuzzy engines usually wrap the matched item (`{item, refIndex, score}`);
/// simple filters return the item itself. Both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    Wrapped {
        item: ContentItem,
        #[serde(rename = "refIndex", default, skip_serializing_if = "Option::is_none")]
        ref_index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        score: Option<f64>,
    },
    Direct(ContentItem),
}

impl SearchResult {
    /// Wrap an item with its position in the searched corpus
    pub fn wrapped(item: ContentItem, ref_index: usize) -> Self {
        SearchResult::Wrapped {
            item,
            ref_index: Some(ref_index),
            score: None,
        }
    }

    pub fn item(&self) -> &ContentItem {
        match self {
            SearchResult::Wrapped { item, .. } | SearchResult::Direct(item) => item,
        }
    }

    pub fn into_item(self) -> ContentItem {
        match self {
            SearchResult::Wrapped { item, .. } | SearchResult::Direct(item) => item,
        }
    }
}

impl From<ContentItem> for SearchResult {
    fn from(item: ContentItem) -> Self {
        SearchResult::Direct(item)
    }
}

/// Search results partitioned into display buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedResults {
    pub projects: Vec<ContentItem>,
    pub hands_on: Vec<ContentItem>,
    pub blog: Vec<ContentItem>,
}

impl GroupedResults {
    pub fn len(&self) -> usize {
        self.projects.len() + self.hands_on.len() + self.blog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the buckets: projects, hands-on, then blog
    pub fn into_flat(self) -> Vec<ContentItem> {
        let mut items = self.projects;
        items.extend(self.hands_on);
        items.extend(self.blog);
        items
    }
}

/// Group search results by content type, keeping input order per bucket
///
/// Items with an unrecognized type are dropped.
pub fn group_results_by_type<I>(results: I) -> GroupedResults
where
    I: IntoIterator,
    I::Item: Into<SearchResult>,
{
    let mut grouped = GroupedResults::default();

    for result in results {
        let result: SearchResult = result.into();
        let item = result.into_item();
        match item.content_type {
            ContentType::Project => grouped.projects.push(item),
            ContentType::HandsOn => grouped.hands_on.push(item),
            ContentType::Blog => grouped.blog.push(item),
            ContentType::Other(_) => {}
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, content_type: ContentType) -> ContentItem {
        ContentItem::new(id, content_type, id, "desc")
    }

    #[test]
    fn test_unwraps_both_shapes() {
        let results = vec![
            SearchResult::wrapped(item("p1", ContentType::Project), 0),
            SearchResult::Direct(item("b1", ContentType::Blog)),
        ];

        let grouped = group_results_by_type(results);
        assert_eq!(grouped.projects[0].id.as_str(), "p1");
        assert_eq!(grouped.blog[0].id.as_str(), "b1");
        assert!(grouped.hands_on.is_empty());
    }

    #[test]
    fn test_keeps_order_within_bucket() {
        let grouped = group_results_by_type(vec![
            item("l2", ContentType::HandsOn),
            item("p1", ContentType::Project),
            item("l1", ContentType::HandsOn),
        ]);

        let labs: Vec<_> = grouped.hands_on.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(labs, vec!["l2", "l1"]);
    }

    #[test]
    fn test_drops_unknown_type() {
        let grouped = group_results_by_type(vec![
            item("p1", ContentType::Project),
            item("x", ContentType::Other("unknown".to_string())),
        ]);

        assert_eq!(grouped.len(), 1);
        assert!(grouped.into_flat().iter().all(|i| i.id.as_str() != "x"));
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_results_by_type(Vec::<SearchResult>::new());
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_deserializes_engine_output() {
        let json = r##"[
            {"item": {"id":"p1","type":"project","title":"T","description":"D",
                      "tags":["a"],"category":"C","link":"#projects"},
             "refIndex": 3, "score": 0.12},
            {"id":"b1","type":"blog","title":"T","description":"D",
             "tags":[],"category":"C","link":"portfolio.html#blog-b1","readTime":"3 min"}
        ]"##;

        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            results[0],
            SearchResult::Wrapped { ref_index: Some(3), .. }
        ));
        assert!(matches!(results[1], SearchResult::Direct(_)));
        assert_eq!(results[1].item().read_time.as_deref(), Some("3 min"));
    }

    #[test]
    fn test_grouped_json_keys() {
        let value = serde_json::to_value(GroupedResults::default()).unwrap();
        assert!(value.get("handsOn").is_some());
        assert!(value.get("projects").is_some());
        assert!(value.get("blog").is_some());
    }
}
