use dioxus::prelude::*;

/// Spinner with a message, shown while a remote call is in flight.
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600 mb-4" }
            p { class: "text-gray-600", "{message}" }
        }
    }
}
