//! Searchable content items.
//!
//! Every entry in the portfolio (project, hands-on lab, blog post) is a
//! `ContentItem`. The `type` tag decides which catalog slot and which result
//! bucket the item belongs to.

use serde::{Deserialize, Serialize};

/// Stable content identifier (authored, e.g. `project-1`, `lab-k8s-security`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Type of content
///
/// Serialized as the plain tag string. Tags outside the known set are kept
/// in `Other` so foreign search results still parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    /// Portfolio project
    Project,

    /// Hands-on lab walkthrough
    HandsOn,

    /// Blog post
    Blog,

    /// Unrecognized tag
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Project => "project",
            ContentType::HandsOn => "hands-on",
            ContentType::Blog => "blog",
            ContentType::Other(tag) => tag,
        }
    }

    /// Whether this is one of the three known content types
    pub fn is_known(&self) -> bool {
        !matches!(self, ContentType::Other(_))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ContentType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "project" => ContentType::Project,
            "hands-on" => ContentType::HandsOn,
            "blog" => ContentType::Blog,
            _ => ContentType::Other(tag),
        }
    }
}

impl From<ContentType> for String {
    fn from(t: ContentType) -> Self {
        match t {
            ContentType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    /// Lenient parse for CLI input; rejects unknown tags.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(ContentType::Project),
            "hands-on" | "handson" | "lab" | "labs" => Ok(ContentType::HandsOn),
            "blog" | "post" | "posts" => Ok(ContentType::Blog),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

/// A single searchable unit of portfolio content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier
    pub id: ContentId,

    /// Discriminator tag
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Display title
    pub title: String,

    /// Display description (blog excerpt for posts)
    pub description: String,

    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Single classification, e.g. "DevOps"
    pub category: String,

    /// Anchor or URL into the site
    pub link: String,

    /// Human-readable duration, e.g. "15 min read"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ContentId::new(id),
            content_type,
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            category: String::new(),
            link: String::new(),
            read_time: None,
        }
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }
}
