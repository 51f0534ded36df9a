use leptos::*;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod macros;

pub mod app;
pub mod application;
pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Installs logging and the browser clock, then mounts the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Sales dashboard starting");

    mount_to_body(|| view! { <app::App/> });
}
