//! Configuration for folio-search.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of the resolved config)
//! 2. Environment variables (FOLIO_SITE, FOLIO_BLOG_INDEX, FOLIO_BLOG_PAGE)
//! 3. Config file (.folio/config.yaml)
//! 4. Defaults (current directory, built-in catalog)
//!
//! Config file discovery:
//! - Searches current directory and parents for .folio/config.yaml
//! - Falls back to ~/.folio/config.yaml
//! - Relative paths in config file are relative to the project root (parent of .folio/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::{self, is_remote};
use crate::library::loader::{DEFAULT_BLOG_INDEX, DEFAULT_BLOG_PAGE};
use crate::library::{BlogLoadError, BlogLoader, Catalog};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub blog: BlogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Site base: http(s) URL or directory (relative to project root)
    pub root: Option<String>,
    /// Authored catalog file replacing the built-in table
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogConfig {
    /// Blog index path relative to the site base
    pub index_path: Option<String>,
    /// Page that hosts blog posts (used in post links)
    pub page: Option<String>,
    /// Upper bound for the blog fetch, applied by the caller
    pub fetch_timeout_seconds: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Site base URL or absolute/relative directory
    pub site: String,
    /// Authored catalog file (None = built-in)
    pub catalog_file: Option<PathBuf>,
    /// Blog index path relative to `site`
    pub blog_index: String,
    /// Page used for blog links
    pub blog_page: String,
    /// Fetch timeout in seconds
    pub fetch_timeout_seconds: u64,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            site: ".".to_string(),
            catalog_file: None,
            blog_index: DEFAULT_BLOG_INDEX.to_string(),
            blog_page: DEFAULT_BLOG_PAGE.to_string(),
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Override the site base
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Override the catalog file
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_file = Some(path.into());
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Build a blog loader for the configured site
    pub fn blog_loader(&self) -> Result<BlogLoader, BlogLoadError> {
        let source = adapters::source_for_site(&self.site, &self.blog_index)?;
        Ok(BlogLoader::from_boxed(source).with_page(self.blog_page.clone()))
    }

    /// Load the configured catalog (built-in unless a file is set)
    pub async fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_file {
            Some(path) => Ok(Catalog::from_file(path).await?),
            None => Ok(Catalog::builtin()),
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".folio").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".folio").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge config file values and environment over the defaults
fn resolve(
    found: Option<(PathBuf, ConfigFile)>,
    env: &dyn Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some((config_path, config)) = found {
        // Project root is the parent of .folio/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if let Some(root) = config.site.root {
            resolved.site = if is_remote(&root) {
                root
            } else {
                resolve_path(&base_dir, &root).display().to_string()
            };
        }
        if let Some(catalog) = config.site.catalog {
            resolved.catalog_file = Some(resolve_path(&base_dir, &catalog));
        }
        if let Some(index_path) = config.blog.index_path {
            resolved.blog_index = index_path;
        }
        if let Some(page) = config.blog.page {
            resolved.blog_page = page;
        }
        if let Some(timeout) = config.blog.fetch_timeout_seconds {
            resolved.fetch_timeout_seconds = timeout;
        }
        resolved.config_file = Some(config_path);
    }

    if let Some(site) = env("FOLIO_SITE") {
        resolved.site = site;
    }
    if let Some(index_path) = env("FOLIO_BLOG_INDEX") {
        resolved.blog_index = index_path;
    }
    if let Some(page) = env("FOLIO_BLOG_PAGE") {
        resolved.blog_page = page;
    }

    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let found = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve(found, &|key| std::env::var(key).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, &no_env);

        assert_eq!(config.site, ".");
        assert_eq!(config.blog_index, "blog/blog-index.json");
        assert_eq!(config.blog_page, "portfolio.html");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert!(config.catalog_file.is_none());
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let folio_dir = temp.path().join(".folio");
        std::fs::create_dir_all(&folio_dir).unwrap();

        let config_path = folio_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
site:
  root: https://portfolio.example/
  catalog: content/catalog.yaml
blog:
  page: index.html
  fetch_timeout_seconds: 3
"#
        )
        .unwrap();

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.blog.index_path, None);

        let config = resolve(Some((config_path.clone(), parsed)), &no_env);
        assert_eq!(config.site, "https://portfolio.example/");
        assert_eq!(
            config.catalog_file,
            Some(temp.path().join("content/catalog.yaml"))
        );
        assert_eq!(config.blog_index, "blog/blog-index.json");
        assert_eq!(config.blog_page, "index.html");
        assert_eq!(config.fetch_timeout_seconds, 3);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = serde_yaml::from_str(
            r#"
version: "1.0"
blog:
  page: index.html
"#,
        )
        .unwrap();

        let env = |key: &str| match key {
            "FOLIO_SITE" => Some("http://localhost:8000/".to_string()),
            "FOLIO_BLOG_PAGE" => Some("blog.html".to_string()),
            _ => None,
        };

        let config = resolve(Some((PathBuf::from("/p/.folio/config.yaml"), file)), &env);
        assert_eq!(config.site, "http://localhost:8000/");
        assert_eq!(config.blog_page, "blog.html");
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }

    #[test]
    fn test_blog_loader_uses_page() {
        let config = ResolvedConfig::default()
            .with_site("https://portfolio.example/")
            .with_catalog_file("catalog.json");

        let loader = config.blog_loader().unwrap();
        assert_eq!(loader.page(), "portfolio.html");
        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.json")));
    }
}
