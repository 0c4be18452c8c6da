use wasm_bindgen::prelude::*;

use crate::config::CatalogConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Installs logging, binds the page and loads the first page of items
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = CatalogConfig::default();
    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Catalog viewer starting",
    );

    if let Err(e) = presentation::mount_catalog(config) {
        get_logger().error(
            LogComponent::Presentation("Initialize"),
            &format!("❌ Failed to mount catalog: {}", e),
        );
    }
}
