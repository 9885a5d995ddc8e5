use crate::config::AppConfig;
use crate::domain::errors::{AppError, AppResult};

pub const CONFIG_META_SELECTOR: &str = "meta[name=\"commodity-hub-config\"]";

/// Defaults merged with the page's config meta tag. A missing tag is
/// normal; a malformed one falls back to the defaults and the problem is
/// handed back so it can be logged once a logger exists.
pub fn load_config() -> (AppConfig, Option<AppError>) {
    match read_meta_content().and_then(|raw| raw.map(|r| AppConfig::from_json(&r)).transpose()) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}

fn read_meta_content() -> AppResult<Option<String>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::BrowserError("document not available".to_string()))?;
    let meta = document
        .query_selector(CONFIG_META_SELECTOR)
        .map_err(|_| AppError::BrowserError("invalid config selector".to_string()))?;
    Ok(meta.and_then(|el| el.get_attribute("content")))
}
