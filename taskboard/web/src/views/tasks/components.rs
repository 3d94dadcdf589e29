use dioxus::prelude::*;
use taskboard_core::Task;

/// Header section for the task board with title and description
#[component]
pub fn TasksHeader() -> Element {
    rsx! {
        div { class: "text-center mb-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Your Tasks" }
            p { class: "text-lg text-gray-600",
                "Add a task below, check it off when it's done."
            }
        }
    }
}

/// Values submitted from the create-task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormInput {
    pub title: String,
    /// `None` when the description field was left empty.
    pub description: Option<String>,
}

/// Form for creating a new task: required title, optional description.
#[component]
pub fn TaskForm(on_create: EventHandler<TaskFormInput>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if title().trim().is_empty() {
            error.set(Some("Please enter a task title".to_string()));
            return;
        }

        let input = TaskFormInput {
            title: title(),
            description: if description().is_empty() {
                None
            } else {
                Some(description())
            },
        };

        error.set(None);
        title.set(String::new());
        description.set(String::new());
        on_create.call(input);
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6",
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Add New Task" }

            form { onsubmit: handle_submit,
                div { class: "mb-4",
                    input {
                        r#type: "text",
                        placeholder: "What needs to be done?",
                        value: "{title}",
                        oninput: move |evt: FormEvent| {
                            title.set(evt.value());
                            if error().is_some() {
                                error.set(None);
                            }
                        },
                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                    }
                }

                div { class: "mb-4",
                    textarea {
                        placeholder: "Add a description (optional)",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                        rows: 3,
                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                    }
                }

                if let Some(error_msg) = error() {
                    div { class: "mb-4 text-red-600 text-sm", "{error_msg}" }
                }

                button {
                    r#type: "submit",
                    class: "w-full bg-blue-600 text-white py-2 px-4 rounded-lg font-medium hover:bg-blue-700 transition-colors",
                    "Add Task"
                }
            }
        }
    }
}

/// Total / pending / completed count cards.
#[component]
pub fn TaskSummary(total: usize, pending: usize, completed: usize) -> Element {
    rsx! {
        div { class: "grid grid-cols-3 gap-4",
            SummaryCard { label: "Total".to_string(), count: total, color: "text-blue-600".to_string() }
            SummaryCard { label: "Pending".to_string(), count: pending, color: "text-amber-600".to_string() }
            SummaryCard { label: "Completed".to_string(), count: completed, color: "text-green-600".to_string() }
        }
    }
}

#[component]
fn SummaryCard(label: String, count: usize, color: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6 text-center",
            div { class: "text-2xl font-bold {color}", "{count}" }
            div { class: "text-sm text-gray-600", "{label}" }
        }
    }
}

/// Component displayed when no tasks exist yet
#[component]
pub fn EmptyTasksState() -> Element {
    rsx! {
        div { class: "text-center py-12 bg-white rounded-lg shadow-md",
            div { class: "text-6xl mb-4", "📝" }
            h2 { class: "text-2xl font-semibold text-gray-900 mb-2", "No Tasks Yet" }
            p { class: "text-gray-600", "Add your first task above to get started!" }
        }
    }
}

/// One group of tasks (pending or completed) with its count in the heading.
#[component]
pub fn TaskGroup(
    title: String,
    tasks: Vec<Task>,
    on_toggle: EventHandler<(u32, bool)>,
    on_delete: EventHandler<u32>,
) -> Element {
    if tasks.is_empty() {
        return rsx! { div {} };
    }

    rsx! {
        div { class: "space-y-3",
            h2 { class: "text-2xl font-semibold text-gray-900",
                "{title} ({tasks.len()})"
            }
            {tasks.iter().map(|task| rsx! {
                TaskCard {
                    key: "{task.id}",
                    task: task.clone(),
                    on_toggle,
                    on_delete,
                }
            })}
        }
    }
}

/// A single task row: completion toggle, title, optional description, and a
/// delete button.
#[component]
pub fn TaskCard(task: Task, on_toggle: EventHandler<(u32, bool)>, on_delete: EventHandler<u32>) -> Element {
    let id = task.id;
    let completed = task.completed;
    let created = task.created_at.format("%Y-%m-%d %H:%M").to_string();
    let title_class = if completed {
        "text-lg font-medium text-gray-400 line-through"
    } else {
        "text-lg font-medium text-gray-900"
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 flex items-start gap-4",
            input {
                r#type: "checkbox",
                checked: completed,
                // Request the opposite of the current status; local state only
                // changes once the server confirms.
                onchange: move |_| on_toggle.call((id, !completed)),
                class: "mt-1 h-5 w-5 rounded border-gray-300",
            }

            div { class: "flex-1",
                h3 { class: "{title_class}", "{task.title}" }
                if let Some(description) = task.description.as_deref() {
                    p { class: "text-sm text-gray-600 mt-1", "{description}" }
                }
                p { class: "text-xs text-gray-400 mt-2", "Created {created}" }
            }

            button {
                onclick: move |_| on_delete.call(id),
                class: "text-red-500 hover:text-red-700 transition-colors text-sm font-medium",
                "Delete"
            }
        }
    }
}
