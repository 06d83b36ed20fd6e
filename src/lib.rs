pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod format_utils;
pub mod infrastructure;

/// Initialize logging and mount the dashboard
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn initialize() {
    use crate::app::App;
    use crate::domain::logging::{LogComponent, get_logger, init_logger};
    use leptos::*;

    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 FX dashboard starting",
    );

    mount_to_body(|| view! { <App /> });
}
