use leptos::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

/// Browser entry point: logging first, then config, then the app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));
    // The log level comes from the config, so the logger is installed after it.
    let (config, config_problem) = infrastructure::load_config();
    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    if let Some(err) = config_problem {
        log_warn!(LogComponent::Infrastructure("Config"), "ignoring config meta tag: {}", err);
    }

    get_logger().log_with_metadata(
        LogLevel::Info,
        LogComponent::Presentation("Initialize"),
        "CommodityHub starting",
        &format!(
            "redirect_delay_ms={} toast_duration_ms={} mobile_breakpoint_px={}",
            config.redirect_delay_ms, config.toast_duration_ms, config.mobile_breakpoint_px
        ),
    );

    mount_to_body(move || view! { <app::App config=config/> });
}
