use commodity_hub::config::AppConfig;
use commodity_hub::infrastructure::config_loader::{CONFIG_META_SELECTOR, load_config};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_meta(content: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.query_selector(CONFIG_META_SELECTOR).unwrap() {
        old.remove();
    }
    let meta = document.create_element("meta").unwrap();
    meta.set_attribute("name", "commodity-hub-config").unwrap();
    meta.set_attribute("content", content).unwrap();
    document.document_element().unwrap().append_child(&meta).unwrap();
}

#[wasm_bindgen_test]
fn meta_tag_overrides_defaults() {
    set_meta(r#"{"toast_duration_ms": 1000}"#);
    let (config, problem) = load_config();
    assert!(problem.is_none());
    assert_eq!(config.toast_duration_ms, 1000);
    assert_eq!(config.redirect_delay_ms, AppConfig::default().redirect_delay_ms);
}

#[wasm_bindgen_test]
fn broken_meta_tag_falls_back() {
    set_meta("not json");
    let (config, problem) = load_config();
    assert!(problem.is_some());
    assert_eq!(config, AppConfig::default());
}
