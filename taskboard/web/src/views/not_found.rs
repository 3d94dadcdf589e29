use crate::components::Header;
use dioxus::prelude::*;

/// Fallback view for unknown routes.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-3xl mx-auto px-6 text-center py-12",
                h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Page not found" }
                p { class: "text-gray-600", "There is no page at /{path}." }
            }
        }
    }
}
