//! Flat-file task storage implementation
//!
//! Stores the whole collection as one pretty-printed JSON array on disk.
//! Every read parses the file and every write rewrites it in full; nothing is
//! cached between calls. There is no locking and no atomic rename: a write
//! racing another writer (or a crash mid-write) can lose or corrupt data.

use std::path::PathBuf;

use async_trait::async_trait;

use super::model::Task;
use super::store::TaskStore;
use crate::Result;

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileTaskStore {
    /// Create a store over the given path.
    ///
    /// The file is not created until the first write; reading a missing file
    /// yields an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn read_all(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.is_empty() {
            return Ok(Vec::new());
        }
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    async fn write_all(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
