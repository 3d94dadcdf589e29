//! Taskboard web application: a dioxus fullstack client backed by four
//! task server functions.
pub mod components;
#[cfg(feature = "server")]
pub mod server;
pub mod views;

use dioxus::prelude::*;
use views::{NotFound, Tasks};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Tasks {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
