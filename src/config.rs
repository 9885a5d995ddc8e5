use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;

/// Build-time log level override, e.g. `COMMODITY_HUB_LOG_LEVEL=warn`.
const LOG_LEVEL_ENV: Option<&str> = option_env!("COMMODITY_HUB_LOG_LEVEL");

/// Runtime knobs. Every field has a default; a page may override any of
/// them with a JSON `<meta name="commodity-hub-config">` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Pause between a successful verification and the redirect
    pub redirect_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// Below this width the navbar collapses into the mobile menu
    pub mobile_breakpoint_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            redirect_delay_ms: 1500,
            toast_duration_ms: 4000,
            mobile_breakpoint_px: 768,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::ConfigError(e.to_string()))
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms as u64)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms as u64)
    }

    pub fn is_mobile_width(&self, width_px: f64) -> bool {
        width_px < self.mobile_breakpoint_px as f64
    }
}

fn default_log_level() -> LogLevel {
    LOG_LEVEL_ENV.and_then(|raw| LogLevel::from_str(raw).ok()).unwrap_or(if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    })
}
