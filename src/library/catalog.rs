//! Catalog of all searchable portfolio content.
//!
//! Projects and hands-on labs are authored up front; the blog slot starts
//! empty and is replaced wholesale by the blog loader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::content::{ContentId, ContentItem, ContentType};

/// Errors that can occur loading an authored catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Catalog of all portfolio content, partitioned by type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Portfolio projects
    #[serde(default)]
    projects: Vec<ContentItem>,

    /// Hands-on labs
    #[serde(default)]
    hands_on: Vec<ContentItem>,

    /// Blog posts (empty until loaded; never read from authored files)
    #[serde(default, skip_deserializing)]
    blog: Vec<ContentItem>,
}

impl Catalog {
    /// Create a catalog from authored lists with an empty blog slot
    pub fn new(projects: Vec<ContentItem>, hands_on: Vec<ContentItem>) -> Self {
        Self {
            projects,
            hands_on,
            blog: Vec::new(),
        }
    }

    /// The portfolio's built-in content table
    pub fn builtin() -> Self {
        Self::new(builtin_projects(), builtin_hands_on())
    }

    /// Load an authored catalog from a JSON or YAML file
    ///
    /// `.yaml`/`.yml` files are read as YAML, everything else as JSON.
    pub async fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let parsed = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn projects(&self) -> &[ContentItem] {
        &self.projects
    }

    pub fn hands_on(&self) -> &[ContentItem] {
        &self.hands_on
    }

    pub fn blog(&self) -> &[ContentItem] {
        &self.blog
    }

    /// Replace the blog slot with freshly loaded posts
    pub fn replace_blog(&mut self, posts: Vec<ContentItem>) {
        self.blog = posts;
    }

    /// Flatten all content into one sequence: projects, hands-on, then blog
    pub fn all_searchable_content(&self) -> Vec<ContentItem> {
        self.projects
            .iter()
            .chain(&self.hands_on)
            .chain(&self.blog)
            .cloned()
            .collect()
    }

    /// Items of a single content type, in source order
    pub fn items_of(&self, content_type: &ContentType) -> &[ContentItem] {
        match content_type {
            ContentType::Project => &self.projects,
            ContentType::HandsOn => &self.hands_on,
            ContentType::Blog => &self.blog,
            ContentType::Other(_) => &[],
        }
    }

    /// IDs that appear more than once across all slots
    pub fn duplicate_ids(&self) -> Vec<ContentId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for item in self.projects.iter().chain(&self.hands_on).chain(&self.blog) {
            if !seen.insert(&item.id) && !duplicates.contains(&item.id) {
                duplicates.push(item.id.clone());
            }
        }

        duplicates
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.projects.len() + self.hands_on.len() + self.blog.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    category: &str,
) -> ContentItem {
    ContentItem::new(id, ContentType::Project, title, description)
        .with_tags(tags.iter().copied())
        .with_category(category)
        .with_link("#projects")
}

fn lab(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    category: &str,
    read_time: &str,
) -> ContentItem {
    ContentItem::new(id, ContentType::HandsOn, title, description)
        .with_tags(tags.iter().copied())
        .with_category(category)
        .with_read_time(read_time)
        .with_link("#hands-on")
}

fn builtin_projects() -> Vec<ContentItem> {
    vec![
        project(
            "project-1",
            "LocalStack CI/CD Pipeline",
            "Complete CI/CD infrastructure using LocalStack, Terraform, and Ansible for local AWS development and testing. Includes automated deployment workflows.",
            &["LocalStack", "Terraform", "Ansible", "Docker", "CI/CD", "AWS"],
            "DevOps",
        ),
        project(
            "project-2",
            "Kubernetes Security Scanner",
            "Automated security scanning tool for Kubernetes clusters. Detects misconfigurations, vulnerabilities, and compliance issues with detailed reporting.",
            &["Kubernetes", "Python", "Security", "K8s"],
            "Security",
        ),
        project(
            "project-3",
            "Infrastructure Automation Framework",
            "Multi-cloud infrastructure automation framework using Terraform modules and Ansible playbooks for consistent deployments across AWS, Azure, and GCP.",
            &["Terraform", "Ansible", "Multi-Cloud", "AWS", "Azure", "GCP"],
            "DevOps",
        ),
        project(
            "project-4",
            "Penetration Testing Toolkit",
            "Custom penetration testing toolkit with automated reconnaissance, vulnerability scanning, and exploitation modules. Built for ethical hacking engagements.",
            &["Python", "Security", "Pentesting", "Ethical Hacking"],
            "Security",
        ),
        project(
            "project-5",
            "Monitoring & Observability Stack",
            "Complete monitoring solution with Prometheus, Grafana, and ELK stack. Custom dashboards for infrastructure metrics, logs, and application performance.",
            &["Prometheus", "Grafana", "ELK", "Monitoring", "Observability"],
            "DevOps",
        ),
        project(
            "project-6",
            "GitOps Deployment Pipeline",
            "GitOps-based deployment pipeline using ArgoCD and Flux. Automated deployments with Git as the single source of truth for declarative infrastructure.",
            &["GitOps", "ArgoCD", "Kubernetes", "Flux", "CI/CD"],
            "DevOps",
        ),
    ]
}

fn builtin_hands_on() -> Vec<ContentItem> {
    vec![
        lab(
            "lab-localstack",
            "Building LocalStack CI/CD Pipeline from Scratch",
            "Complete walkthrough of setting up a production-grade CI/CD pipeline using LocalStack, Terraform, and Ansible. Includes infrastructure as code, automated testing, and deployment strategies.",
            &["DevOps", "CI/CD", "LocalStack", "Terraform", "Ansible"],
            "DevOps",
            "15 min read",
        ),
        lab(
            "lab-k8s-security",
            "Kubernetes Security Hardening Lab",
            "Step-by-step guide to hardening Kubernetes clusters. Covers RBAC, Network Policies, Pod Security Standards, and runtime security scanning.",
            &["Security", "Kubernetes", "RBAC", "DevSecOps"],
            "Security",
            "20 min read",
        ),
        lab(
            "lab-web-pentesting",
            "Web Application Pentesting Lab",
            "Comprehensive web application penetration testing tutorial. Covers reconnaissance, vulnerability discovery, and exploitation of common web vulnerabilities.",
            &["Security", "Web", "Pentesting", "OWASP"],
            "Security",
            "25 min read",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> ContentItem {
        ContentItem::new(id, ContentType::Blog, id, "excerpt").with_link("portfolio.html#blog-x")
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.projects().len(), 6);
        assert_eq!(catalog.hands_on().len(), 3);
        assert!(catalog.blog().is_empty());
        assert!(catalog.duplicate_ids().is_empty());
        assert!(catalog
            .projects()
            .iter()
            .all(|i| i.content_type == ContentType::Project && i.read_time.is_none()));
        assert!(catalog
            .hands_on()
            .iter()
            .all(|i| i.content_type == ContentType::HandsOn && i.read_time.is_some()));
    }

    #[test]
    fn test_replace_blog_is_wholesale() {
        let mut catalog = Catalog::builtin();
        catalog.replace_blog(vec![post("a"), post("b")]);
        assert_eq!(catalog.blog().len(), 2);

        catalog.replace_blog(vec![post("c")]);
        assert_eq!(catalog.blog().len(), 1);
        assert_eq!(catalog.blog()[0].id.as_str(), "c");
    }

    #[test]
    fn test_all_searchable_content_order() {
        let mut catalog = Catalog::builtin();
        catalog.replace_blog(vec![post("blog-1")]);

        let all = catalog.all_searchable_content();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].id.as_str(), "project-1");
        assert_eq!(all[6].id.as_str(), "lab-localstack");
        assert_eq!(all[9].id.as_str(), "blog-1");

        // Aggregation does not drain the catalog
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_duplicate_ids() {
        let mut catalog = Catalog::builtin();
        catalog.replace_blog(vec![post("project-1"), post("dup"), post("dup"), post("dup")]);

        let dups = catalog.duplicate_ids();
        assert_eq!(dups, vec![ContentId::new("project-1"), ContentId::new("dup")]);
    }

    #[test]
    fn test_items_of() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.items_of(&ContentType::HandsOn).len(), 3);
        assert!(catalog.items_of(&ContentType::Other("x".into())).is_empty());
    }

    #[tokio::test]
    async fn test_from_yaml_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.yaml");
        std::fs::write(
            &path,
            r##"
projects:
  - id: p1
    type: project
    title: Scanner
    description: Finds things
    tags: [Rust]
    category: Security
    link: "#projects"
handsOn:
  - id: l1
    type: hands-on
    title: Lab
    description: Walkthrough
    category: DevOps
    link: "#hands-on"
    readTime: 5 min read
"##,
        )
        .unwrap();

        let catalog = Catalog::from_file(&path).await.unwrap();
        assert_eq!(catalog.projects().len(), 1);
        assert_eq!(catalog.hands_on()[0].read_time.as_deref(), Some("5 min read"));
        assert!(catalog.hands_on()[0].tags.is_empty());
        assert!(catalog.blog().is_empty());
    }

    #[tokio::test]
    async fn test_from_file_ignores_blog_key() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r##"{"projects":[],"handsOn":[],"blog":[{"id":"b1","type":"blog","title":"T",
                "description":"D","tags":[],"category":"C","link":"portfolio.html#blog-b1"}]}"##,
        )
        .unwrap();

        let catalog = Catalog::from_file(&path).await.unwrap();
        assert!(catalog.blog().is_empty());
        assert!(catalog.all_searchable_content().is_empty());
    }

    #[tokio::test]
    async fn test_from_file_errors() {
        let temp = tempfile::TempDir::new().unwrap();

        let missing = temp.path().join("missing.json");
        assert!(matches!(
            Catalog::from_file(&missing).await,
            Err(CatalogError::Io { .. })
        ));

        let broken = temp.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Catalog::from_file(&broken).await,
            Err(CatalogError::Parse { .. })
        ));
    }
}
