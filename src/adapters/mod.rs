//! Sources for the published blog index.
//!
//! The index lives at a path relative to the site: either served over HTTP
//! or sitting in a local build directory.

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::library::BlogLoadError;

pub use file::FileBlogIndex;
pub use http::HttpBlogIndex;

/// Trait for blog index sources
#[async_trait]
pub trait BlogIndexSource: Send + Sync {
    /// Human-readable location (URL or path)
    fn describe(&self) -> String;

    /// Fetch the raw index body
    async fn fetch_index(&self) -> Result<String, BlogLoadError>;
}

/// Whether a site location should be fetched over HTTP
pub fn is_remote(site: &str) -> bool {
    let lower = site.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick a source for `site`: HTTP(S) URLs are fetched, anything else is a directory
pub fn source_for_site(
    site: &str,
    index_path: &str,
) -> Result<Box<dyn BlogIndexSource>, BlogLoadError> {
    if is_remote(site) {
        Ok(Box::new(HttpBlogIndex::new(site, index_path)?))
    } else {
        Ok(Box::new(FileBlogIndex::new(site, index_path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_site() {
        let remote = source_for_site("https://example.com/", "blog/blog-index.json").unwrap();
        assert_eq!(remote.describe(), "https://example.com/blog/blog-index.json");

        let upper = source_for_site("HTTPS://example.com/", "blog/blog-index.json").unwrap();
        assert_eq!(upper.describe(), "https://example.com/blog/blog-index.json");

        let local = source_for_site("./public", "blog/blog-index.json").unwrap();
        assert!(local.describe().ends_with("blog-index.json"));
        assert!(local.describe().contains("public"));
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://localhost:8000"));
        assert!(is_remote("HTTPS://Portfolio.example/"));
        assert!(!is_remote("site/dist"));
    }
}
