//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tp_core::task::FileTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: FileTaskStore,
    data_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        let tasks_path = data_dir.join("tasks.json");
        Self {
            inner: Arc::new(AppStateInner {
                task_store: FileTaskStore::new(tasks_path),
                data_dir,
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }

    /// Directory holding the persisted collection
    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }
}
