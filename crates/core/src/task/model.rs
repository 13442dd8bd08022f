//! Task model definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::draft::{TaskDraft, TaskPatch};

/// Task status
///
/// Optional on a task; no default is assigned when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// A task record
///
/// The schema is open: `id`, `title` and `status` are modeled, and any other
/// caller-supplied fields are kept verbatim in the flattened `extra` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Build a new task from a validated draft, assigning a fresh id.
    ///
    /// The generated id always wins: any `id` the caller sent was already
    /// dropped by the gate.
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            status: draft.status,
            extra: draft.extra,
        }
    }

    /// Merge a validated patch into this task, field by field.
    ///
    /// Fields absent from the patch are preserved; `id` is never touched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if patch.status.is_some() {
            self.status = patch.status;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}
