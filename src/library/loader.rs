//! Blog loader: fetches the blog index and fills the catalog's blog slot.
//!
//! Loading is non-fatal. A failed fetch or parse is logged and reported
//! through `LoadOutcome::Failed`; the catalog keeps whatever it had before.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{error, info};

use super::catalog::Catalog;
use super::content::{ContentId, ContentItem, ContentType};
use crate::adapters::BlogIndexSource;

/// Default relative location of the blog index
pub const DEFAULT_BLOG_INDEX: &str = "blog/blog-index.json";

/// Default page that hosts blog posts
pub const DEFAULT_BLOG_PAGE: &str = "portfolio.html";

/// Errors that can occur while loading the blog index
#[derive(Debug, Error)]
pub enum BlogLoadError {
    #[error("Invalid blog index URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed blog index: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One record of the blog index as published by the site
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub read_time: Option<String>,
    pub folder: String,
}

/// Treat `null` the same as a missing list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl BlogPost {
    /// Map the record to a searchable blog item linking into `page`
    pub fn into_item(self, page: &str) -> ContentItem {
        ContentItem {
            id: ContentId::new(self.id),
            content_type: ContentType::Blog,
            title: self.title,
            description: self.excerpt,
            tags: self.tags,
            category: self.category,
            link: format!("{}#blog-{}", page, self.folder),
            read_time: self.read_time,
        }
    }
}

/// Parse a blog index body into blog items, preserving source order
pub fn parse_index(body: &str, page: &str) -> Result<Vec<ContentItem>, BlogLoadError> {
    let posts: Vec<BlogPost> = serde_json::from_str(body)?;
    Ok(posts.into_iter().map(|p| p.into_item(page)).collect())
}

/// Result of a load attempt
#[derive(Debug)]
pub enum LoadOutcome {
    /// Blog slot replaced with `count` posts
    Loaded { count: usize },

    /// Blog slot left untouched
    Failed(BlogLoadError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    pub fn error(&self) -> Option<&BlogLoadError> {
        match self {
            LoadOutcome::Failed(e) => Some(e),
            LoadOutcome::Loaded { .. } => None,
        }
    }
}

/// Loads blog posts from a `BlogIndexSource`
pub struct BlogLoader {
    source: Box<dyn BlogIndexSource>,
    page: String,
}

impl BlogLoader {
    pub fn new(source: impl BlogIndexSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn BlogIndexSource>) -> Self {
        Self {
            source,
            page: DEFAULT_BLOG_PAGE.to_string(),
        }
    }

    /// Set the page used when synthesizing post links
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    /// Fetch and map the blog index without touching any catalog
    pub async fn fetch(&self) -> Result<Vec<ContentItem>, BlogLoadError> {
        let body = self.source.fetch_index().await?;
        parse_index(&body, &self.page)
    }

    /// Fetch the blog index and replace the catalog's blog slot
    ///
    /// Never fails: errors are logged and returned as `LoadOutcome::Failed`,
    /// leaving the blog slot as it was.
    pub async fn load_into(&self, catalog: &mut Catalog) -> LoadOutcome {
        match self.fetch().await {
            Ok(posts) => {
                let count = posts.len();
                catalog.replace_blog(posts);
                info!(count, source = %self.source.describe(), "Loaded blog posts for search");
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                error!(source = %self.source.describe(), "Error loading blog posts for search: {}", e);
                LoadOutcome::Failed(e)
            }
        }
    }
}
