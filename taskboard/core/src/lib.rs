//! Core domain models and client-side state logic for Taskboard.
pub mod task;

pub use task::{NewTask, Task, TaskBreakdown, TaskError, TaskEvent, TaskList};
