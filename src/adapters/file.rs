//! Blog index read from a local site directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::BlogIndexSource;
use crate::library::BlogLoadError;

/// Blog index inside a built site on disk
pub struct FileBlogIndex {
    path: PathBuf,
}

impl FileBlogIndex {
    pub fn new(site_dir: impl AsRef<Path>, index_path: &str) -> Self {
        Self {
            path: site_dir.as_ref().join(index_path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BlogIndexSource for FileBlogIndex {
    fn describe(&self) -> String {
        self.path().display().to_string()
    }

    async fn fetch_index(&self) -> Result<String, BlogLoadError> {
        debug!(path = %self.path.display(), "Reading blog index");

        fs::read_to_string(&self.path)
            .await
            .map_err(|source| BlogLoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
