use dioxus::prelude::*;

/// Top navigation bar shared by every view.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "bg-white shadow-sm",
            div { class: "max-w-4xl mx-auto px-6 py-4 flex items-center justify-between",
                span { class: "text-xl font-bold text-gray-900", "Taskboard" }
                span { class: "text-sm text-gray-500", "Stay organized and get things done" }
            }
        }
    }
}
