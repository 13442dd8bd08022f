//! Task store trait
//!
//! The store is the only component that touches the persisted document.
//! Handlers read the whole collection, compute a new one, and write it back.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Storage interface for the task collection
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Load the full collection, in insertion order.
    ///
    /// A missing or empty document is an empty collection, not an error.
    async fn read_all(&self) -> Result<Vec<Task>>;

    /// Replace the persisted document with the given collection.
    async fn write_all(&self, tasks: &[Task]) -> Result<()>;
}
