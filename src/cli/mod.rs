//! Command-line interface for folio-search.
//!
//! Provides commands for listing the aggregated corpus, searching it,
//! checking the blog index, and showing the resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, warn};

use crate::config::{self, ResolvedConfig};
use crate::library::{Catalog, ContentItem, ContentType, LoadOutcome};
use crate::search::{group_results_by_type, matcher, GroupedResults};

/// folio-search - Searchable content index for a static portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio-search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site base URL or directory holding the blog index
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Authored catalog file (JSON or YAML) replacing the built-in table
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Skip loading the blog index
    #[arg(long, global = true)]
    pub no_blog: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all searchable content
    List {
        /// Filter by content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search content and group hits by type
    Search {
        /// Search query
        query: String,

        /// Print grouped results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load the blog index and show the mapped posts
    Blog,

    /// Show resolved configuration (debug)
    Config,
}

/// Content type for CLI (maps to ContentType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    /// Portfolio project
    Project,

    /// Hands-on lab
    HandsOn,

    /// Blog post
    Blog,
}

impl From<TypeArg> for ContentType {
    fn from(t: TypeArg) -> Self {
        match t {
            TypeArg::Project => ContentType::Project,
            TypeArg::HandsOn => ContentType::HandsOn,
            TypeArg::Blog => ContentType::Blog,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut cfg = config::config()?.clone();
        if let Some(site) = self.site {
            cfg = cfg.with_site(site);
        }
        if let Some(catalog) = self.catalog {
            cfg = cfg.with_catalog_file(catalog);
        }

        match self.command {
            Commands::List { content_type, json } => {
                let catalog = build_catalog(&cfg, !self.no_blog).await?;
                list_content(&catalog, content_type, json)
            }
            Commands::Search { query, json } => {
                let catalog = build_catalog(&cfg, !self.no_blog).await?;
                search_content(&catalog, &query, json)
            }
            Commands::Blog => show_blog(&cfg).await,
            Commands::Config => {
                show_config(&cfg);
                Ok(())
            }
        }
    }
}

/// Load the catalog and, unless disabled, fill its blog slot
///
/// A failed or timed-out blog load leaves the blog slot empty; search still
/// runs over projects and labs.
async fn build_catalog(cfg: &ResolvedConfig, load_blog: bool) -> Result<Catalog> {
    let mut catalog = cfg
        .load_catalog()
        .await
        .context("Failed to load content catalog")?;

    if !load_blog {
        return Ok(catalog);
    }

    match cfg.blog_loader() {
        Ok(loader) => {
            if tokio::time::timeout(cfg.fetch_timeout(), loader.load_into(&mut catalog))
                .await
                .is_err()
            {
                warn!(
                    timeout_seconds = cfg.fetch_timeout_seconds,
                    "Blog index fetch timed out, continuing without blog posts"
                );
            }
        }
        Err(e) => error!("Error loading blog posts for search: {}", e),
    }

    Ok(catalog)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

fn print_table(items: &[ContentItem]) {
    println!("{:<24} {:<10} {:<50}", "ID", "TYPE", "TITLE");
    println!("{}", "-".repeat(86));

    for item in items {
        println!(
            "{:<24} {:<10} {:<50}",
            item.id.as_str(),
            item.content_type.to_string(),
            truncate(&item.title, 50)
        );
    }
}

/// List the aggregated corpus
fn list_content(catalog: &Catalog, content_type: Option<TypeArg>, json: bool) -> Result<()> {
    let items: Vec<ContentItem> = match content_type {
        Some(t) => catalog.items_of(&ContentType::from(t)).to_vec(),
        None => catalog.all_searchable_content(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No content.");
        return Ok(());
    }

    print_table(&items);
    println!("\nTotal: {} items", items.len());

    let duplicates = catalog.duplicate_ids();
    if !duplicates.is_empty() {
        let ids: Vec<_> = duplicates.iter().map(|id| id.as_str()).collect();
        println!("Duplicate IDs: {}", ids.join(", "));
    }

    Ok(())
}

/// Search the corpus and print hits grouped by type
fn search_content(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let corpus = catalog.all_searchable_content();
    let grouped = group_results_by_type(matcher::filter(&corpus, query));

    if json {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    if grouped.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":", grouped.len(), query);
    print_groups(&grouped);

    Ok(())
}

fn print_groups(grouped: &GroupedResults) {
    let sections = [
        ("Projects", &grouped.projects),
        ("Hands-On", &grouped.hands_on),
        ("Blog", &grouped.blog),
    ];

    for (label, items) in sections {
        if items.is_empty() {
            continue;
        }

        println!("\n{} ({})", label, items.len());
        for item in items.iter() {
            let read_time = item
                .read_time
                .as_deref()
                .map(|t| format!(" [{}]", t))
                .unwrap_or_default();
            println!("  {}{}", truncate(&item.title, 60), read_time);
            println!("    {} | {}", item.category, item.link);
        }
    }
}

/// Load the blog index on its own and report the outcome
async fn show_blog(cfg: &ResolvedConfig) -> Result<()> {
    let loader = cfg.blog_loader()?;
    let mut catalog = Catalog::default();

    let outcome = tokio::time::timeout(cfg.fetch_timeout(), loader.load_into(&mut catalog))
        .await
        .with_context(|| {
            format!(
                "Blog index fetch timed out after {}s",
                cfg.fetch_timeout_seconds
            )
        })?;

    match outcome {
        LoadOutcome::Loaded { count } => {
            println!("Loaded {} blog post(s) from {}/{}\n", count, cfg.site, cfg.blog_index);
            if count > 0 {
                print_table(catalog.blog());
                println!();
                for item in catalog.blog() {
                    println!("  {} -> {}", item.id, item.link);
                }
            }
            Ok(())
        }
        LoadOutcome::Failed(e) => Err(e).context("Blog index could not be loaded"),
    }
}

/// Show resolved configuration
fn show_config(cfg: &ResolvedConfig) {
    println!("folio-search configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Site:          {}", cfg.site);
    println!(
        "Catalog:       {}",
        cfg.catalog_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!("Blog index:    {}", cfg.blog_index);
    println!("Blog page:     {}", cfg.blog_page);
    println!("Fetch timeout: {}s", cfg.fetch_timeout_seconds);
}
