//! Task module
//!
//! Task records, the validation gate, and flat-file persistence.

mod draft;
mod file_store;
mod model;
mod store;

pub use draft::{TaskDraft, TaskPatch};
pub use file_store::FileTaskStore;
pub use model::{Task, TaskStatus};
pub use store::TaskStore;
