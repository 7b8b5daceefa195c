//! HTTP blog index source.
//!
//! The index path is resolved against the site base the way a browser
//! resolves a relative `fetch`: `https://host/dir/` + `blog/blog-index.json`.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::BlogIndexSource;
use crate::library::BlogLoadError;

/// Blog index served over HTTP
pub struct HttpBlogIndex {
    /// Fully resolved index URL
    url: Url,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpBlogIndex {
    /// Resolve `index_path` against `base` and build a client
    pub fn new(base: &str, index_path: &str) -> Result<Self, BlogLoadError> {
        let url = resolve_url(base, index_path).map_err(|e| BlogLoadError::InvalidUrl {
            url: base.to_string(),
            message: format!("{:#}", e),
        })?;

        Ok(Self {
            url,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn resolve_url(base: &str, index_path: &str) -> anyhow::Result<Url> {
    let base = Url::parse(base).with_context(|| format!("Failed to parse site URL: {}", base))?;
    base.join(index_path)
        .with_context(|| format!("Failed to join index path: {}", index_path))
}

#[async_trait]
impl BlogIndexSource for HttpBlogIndex {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_index(&self) -> Result<String, BlogLoadError> {
        debug!(url = %self.url, "Fetching blog index");

        let http_err = |source: reqwest::Error| BlogLoadError::Http {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlogLoadError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        response.text().await.map_err(http_err)
    }
}
