use crate::components::{ErrorMessage, Header, LoadingSpinner};
use dioxus::prelude::*;
use taskboard_core::{Task, TaskEvent, TaskList};

#[cfg(feature = "server")]
pub mod backend;
mod components;

/// The task board page: create form, summary counts, and the pending and
/// completed groups.
///
/// The full list is held in a single `TaskList` signal; every server
/// response is folded in through `TaskList::apply`, and a failed call is
/// logged and leaves the list untouched.
#[component]
pub fn Tasks() -> Element {
    let mut list = use_signal(TaskList::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    // Load the full task list on mount.
    use_effect(move || {
        spawn(async move {
            match get_tasks().await {
                Ok(tasks) => {
                    list.write().apply(TaskEvent::Loaded(tasks));
                    loading.set(false);
                }
                Err(e) => {
                    tracing::error!("Failed to load tasks: {e}");
                    error.set(Some(format!("Failed to load tasks: {e}")));
                    loading.set(false);
                }
            }
        });
    });

    let handle_create = move |input: components::TaskFormInput| {
        spawn(async move {
            match create_task(input.title, input.description).await {
                // The new task is appended only once the server confirms it.
                Ok(task) => list.write().apply(TaskEvent::Created(task)),
                Err(e) => tracing::error!("Failed to create task: {e}"),
            }
        });
    };

    let handle_toggle = move |(id, completed): (u32, bool)| {
        spawn(async move {
            match update_task_completion(id, completed).await {
                Ok(task) => list.write().apply(TaskEvent::CompletionChanged(task)),
                Err(e) => tracing::error!("Failed to update task {id}: {e}"),
            }
        });
    };

    let handle_delete = move |id: u32| {
        spawn(async move {
            match delete_task(id).await {
                Ok(()) => list.write().apply(TaskEvent::Deleted(id)),
                Err(e) => tracing::error!("Failed to delete task {id}: {e}"),
            }
        });
    };

    let snapshot = list();
    let breakdown = snapshot.breakdown();

    rsx! {
        Header {}

        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-4xl mx-auto px-6 space-y-8",
                components::TasksHeader {}
                components::TaskForm { on_create: handle_create }

                if loading() {
                    LoadingSpinner { message: "Loading tasks...".to_string() }
                } else if let Some(error_msg) = error() {
                    ErrorMessage { message: error_msg }
                } else {
                    components::TaskSummary {
                        total: snapshot.total(),
                        pending: breakdown.pending.len(),
                        completed: breakdown.completed.len(),
                    }

                    if snapshot.is_empty() {
                        components::EmptyTasksState {}
                    } else {
                        components::TaskGroup {
                            title: "Pending".to_string(),
                            tasks: breakdown.pending,
                            on_toggle: handle_toggle,
                            on_delete: handle_delete,
                        }
                        components::TaskGroup {
                            title: "Completed".to_string(),
                            tasks: breakdown.completed,
                            on_toggle: handle_toggle,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

/// Validates the title and stores a new task, returning the stored record
/// with its generated id.
#[server]
async fn create_task(title: String, description: Option<String>) -> Result<Task, ServerFnError> {
    use crate::server::get_db_pool;
    use taskboard_core::NewTask;
    let new_task = NewTask::new(title, description)?;
    let db = get_db_pool().await;
    let task = backend::create_task(db, new_task).await?;
    Ok(task)
}

/// Fetch every task, most recently created first.
#[server]
async fn get_tasks() -> Result<Vec<Task>, ServerFnError> {
    use crate::server::get_db_pool;
    let db = get_db_pool().await;
    let tasks = backend::get_tasks(db).await?;
    Ok(tasks)
}

/// Set a task's completion status; rejects with an error naming the id when
/// no such task exists.
#[server]
async fn update_task_completion(id: u32, completed: bool) -> Result<Task, ServerFnError> {
    use crate::server::get_db_pool;
    let db = get_db_pool().await;
    let task = backend::update_task_completion(db, id, completed).await?;
    Ok(task)
}

/// Delete a task by id. Deleting an id that does not exist succeeds.
#[server]
async fn delete_task(id: u32) -> Result<(), ServerFnError> {
    use crate::server::get_db_pool;
    let db = get_db_pool().await;
    backend::delete_task(db, id).await?;
    Ok(())
}
