// TaskList - In-memory task list with priority sorting

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use app::{App, FormState};
pub use config::Config;
pub use error::ValidationError;
pub use models::{ParsePriorityError, Priority, SortDirection, Task, TaskId, TaskInput};
pub use shell::{Command, Shell};
pub use store::{TaskStore, Upsert};
