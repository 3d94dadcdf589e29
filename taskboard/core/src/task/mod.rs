use chrono::{DateTime, Utc};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single to-do item as stored by the server and mirrored by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// `None` when the task was created without a description; distinct from
    /// an empty string the user typed.
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskError {
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// Validated input for creating a task.
///
/// Construction fails when the title is empty after trimming; the title is
/// otherwise stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewTask {
    title: String,
    description: Option<String>,
}

impl NewTask {
    pub fn new(title: String, description: Option<String>) -> Result<Self, TaskError> {
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(Self { title, description })
    }

    /// Returns the task title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A server-confirmed change the client folds into its local [`TaskList`].
///
/// Every remote operation maps to exactly one event; a failed call produces
/// no event, leaving local state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// Full list as returned by the list operation.
    Loaded(Vec<Task>),
    /// A newly created task, appended to the list.
    Created(Task),
    /// A task whose completion status (and `updated_at`) changed.
    CompletionChanged(Task),
    /// A task deleted by id.
    Deleted(u32),
}

/// The client's in-memory mirror of the server's task table.
///
/// State changes only through [`TaskList::apply`], so every transition is an
/// explicit, pure function of the previous state and one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one server-confirmed event into the list.
    pub fn apply(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::Loaded(tasks) => self.tasks = tasks,
            TaskEvent::Created(task) => self.tasks.push(task),
            TaskEvent::CompletionChanged(updated) => {
                if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
                    *task = updated;
                }
            }
            TaskEvent::Deleted(id) => self.tasks.retain(|task| task.id != id),
        }
    }

    /// All tasks in the order the server returned them.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Total number of tasks.
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Splits the list into pending and completed groups.
    ///
    /// An order-preserving filter: each group keeps the order the list
    /// operation returned, with no further sorting.
    pub fn breakdown(&self) -> TaskBreakdown {
        let (completed, pending) = self
            .tasks
            .iter()
            .cloned()
            .partition(|task| task.completed);
        TaskBreakdown { pending, completed }
    }
}

/// Pending/completed partition of a [`TaskList`] for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBreakdown {
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str, completed: bool) -> Task {
        let now = Utc::now();
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_task_accepts_valid_title() {
        let new_task = NewTask::new("Buy milk".to_string(), None).expect("valid title");
        assert_eq!(new_task.title(), "Buy milk");
        assert_eq!(new_task.description(), None);
    }

    #[test]
    fn new_task_keeps_description() {
        let new_task = NewTask::new("Buy milk".to_string(), Some("2 liters".to_string()))
            .expect("valid title");
        assert_eq!(new_task.description(), Some("2 liters"));
    }

    #[test]
    fn new_task_rejects_empty_title() {
        assert_eq!(
            NewTask::new(String::new(), None),
            Err(TaskError::EmptyTitle)
        );
    }

    #[test]
    fn new_task_rejects_whitespace_only_title() {
        assert_eq!(
            NewTask::new("   \t".to_string(), None),
            Err(TaskError::EmptyTitle)
        );
    }

    #[test]
    fn new_task_preserves_surrounding_whitespace() {
        // Validation trims a copy; the stored title is untouched.
        let new_task = NewTask::new("  padded  ".to_string(), None).expect("valid title");
        assert_eq!(new_task.title(), "  padded  ");
    }

    #[test]
    fn empty_description_is_distinct_from_none() {
        let none = NewTask::new("a".to_string(), None).unwrap();
        let empty = NewTask::new("a".to_string(), Some(String::new())).unwrap();
        assert_ne!(none, empty);
        assert_eq!(empty.description(), Some(""));
    }

    #[test]
    fn loaded_replaces_the_list() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Created(task(1, "old", false)));

        list.apply(TaskEvent::Loaded(vec![task(2, "b", false), task(3, "c", true)]));

        assert_eq!(list.total(), 2);
        assert_eq!(list.tasks()[0].id, 2);
    }

    #[test]
    fn created_appends_to_the_list() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![task(1, "a", false)]));

        list.apply(TaskEvent::Created(task(2, "b", false)));

        assert_eq!(list.total(), 2);
        assert_eq!(list.tasks()[1].id, 2);
    }

    #[test]
    fn completion_changed_replaces_only_the_matching_task() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![
            task(1, "a", false),
            task(2, "b", false),
        ]));

        let mut updated = task(2, "b", true);
        updated.updated_at = updated.created_at + chrono::Duration::seconds(5);
        list.apply(TaskEvent::CompletionChanged(updated.clone()));

        assert!(!list.tasks()[0].completed);
        assert_eq!(list.tasks()[1], updated);
    }

    #[test]
    fn completion_changed_for_unknown_id_is_a_no_op() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![task(1, "a", false)]));
        let before = list.clone();

        list.apply(TaskEvent::CompletionChanged(task(99, "ghost", true)));

        assert_eq!(list, before);
    }

    #[test]
    fn deleted_removes_exactly_the_matching_task() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![
            task(1, "a", false),
            task(2, "b", true),
            task(3, "c", false),
        ]));

        list.apply(TaskEvent::Deleted(2));

        assert_eq!(list.total(), 2);
        assert!(list.tasks().iter().all(|t| t.id != 2));
    }

    #[test]
    fn deleting_an_unknown_id_leaves_the_list_unchanged() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![task(1, "a", false)]));

        list.apply(TaskEvent::Deleted(42));

        assert_eq!(list.total(), 1);
    }

    #[test]
    fn breakdown_partitions_by_completion() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![
            task(1, "a", false),
            task(2, "b", true),
            task(3, "c", false),
        ]));

        let breakdown = list.breakdown();

        assert_eq!(breakdown.pending.len(), 2);
        assert_eq!(breakdown.completed.len(), 1);
        assert_eq!(breakdown.completed[0].id, 2);
    }

    #[test]
    fn breakdown_preserves_list_order_within_each_group() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![
            task(3, "newest", false),
            task(2, "middle", false),
            task(1, "oldest", false),
        ]));

        let ids: Vec<u32> = list.breakdown().pending.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn toggling_twice_returns_a_task_to_pending() {
        let mut list = TaskList::new();
        list.apply(TaskEvent::Loaded(vec![task(1, "a", false)]));

        list.apply(TaskEvent::CompletionChanged(task(1, "a", true)));
        assert!(list.tasks()[0].completed);

        list.apply(TaskEvent::CompletionChanged(task(1, "a", false)));
        assert!(!list.tasks()[0].completed);
    }
}
