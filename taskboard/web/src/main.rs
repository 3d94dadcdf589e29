fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(taskboard_web::server::launch_server());
    }
    #[cfg(not(feature = "server"))]
    dioxus::launch(taskboard_web::App);
}
