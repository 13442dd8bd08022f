//! Validation gate for task payloads
//!
//! Create and update payloads are open-schema JSON objects. The gate checks
//! `title` and `status`, drops any caller-supplied `id`, and passes every
//! other field through untouched. Nothing here touches the store; a rejected
//! payload never reaches disk.

use serde_json::{Map, Value};

use super::model::TaskStatus;
use crate::{Error, Result};

const TITLE_RULE: &str = "Title is required and must be a string";
const STATUS_RULE: &str = "Status must be 'pending', 'in-progress', or 'completed'";

/// A create payload that has passed the validation gate.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub status: Option<TaskStatus>,
    pub extra: Map<String, Value>,
}

/// An update payload that has passed the validation gate.
///
/// Unlike a draft, a patch may omit `title`; fields it omits are preserved on
/// the task it is applied to.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub extra: Map<String, Value>,
}

impl TaskDraft {
    /// Validate a raw create payload.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self> {
        let title = match payload.remove("title") {
            Some(Value::String(title)) if !title.is_empty() => title,
            _ => return Err(Error::Validation(TITLE_RULE.to_string())),
        };
        let status = take_status(&mut payload)?;
        payload.remove("id");

        Ok(Self {
            title,
            status,
            extra: payload,
        })
    }
}

impl TaskPatch {
    /// Validate a raw update payload.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self> {
        let title = match payload.remove("title") {
            None => None,
            Some(Value::String(title)) if !title.is_empty() => Some(title),
            Some(_) => return Err(Error::Validation(TITLE_RULE.to_string())),
        };
        let status = take_status(&mut payload)?;
        payload.remove("id");

        Ok(Self {
            title,
            status,
            extra: payload,
        })
    }
}

/// Pull `status` out of the payload, if any. A JSON `null` counts as absent.
fn take_status(payload: &mut Map<String, Value>) -> Result<Option<TaskStatus>> {
    match payload.remove("status") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|_| Error::Validation(STATUS_RULE.to_string())),
    }
}
