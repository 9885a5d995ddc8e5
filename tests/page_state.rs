use commodity_hub::presentation::pages::{AiTradingPage, AuthenticationPage};
use leptos::*;
use leptos_router::Router;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(page: impl FnOnce() -> View + 'static) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();
    mount_to(host.clone(), move || view! { <Router>{page()}</Router> });
    host
}

fn find<T: JsCast>(host: &HtmlElement, selector: &str) -> T {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .unchecked_into()
}

fn click_tab(host: &HtmlElement, label: &str) {
    let tabs = host.query_selector_all("button[role=tab]").unwrap();
    let tab = (0..tabs.length())
        .filter_map(|i| tabs.get(i))
        .find(|node| node.text_content().unwrap_or_default().contains(label))
        .unwrap_or_else(|| panic!("no tab labelled {label}"));
    tab.unchecked_into::<HtmlElement>().click();
}

fn fire(target: &HtmlElement, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn type_into(host: &HtmlElement, selector: &str, value: &str) {
    let input: HtmlInputElement = find(host, selector);
    input.set_value(value);
    fire(&input, "input");
}

fn switch_state(host: &HtmlElement, label: &str) -> Option<String> {
    find::<HtmlElement>(host, &format!("button[role=switch][aria-label=\"{label}\"]"))
        .get_attribute("aria-checked")
}

#[wasm_bindgen_test]
fn ai_panels_keep_their_state_across_tabs() {
    let host = mount(|| view! { <AiTradingPage/> }.into_view());

    let select: HtmlSelectElement = find(&host, "select");
    select.set_value("oil");
    fire(&select, "change");

    click_tab(&host, "Trading Bots");
    find::<HtmlElement>(&host, "button[role=switch][aria-label=\"Gold Momentum Trader\"]").click();
    assert_eq!(switch_state(&host, "Gold Momentum Trader").as_deref(), Some("true"));

    click_tab(&host, "Risk Management");
    type_into(&host, "input[type=range]", "80");
    find::<HtmlElement>(&host, "button[role=switch][aria-label=\"Hedging Automation\"]").click();

    click_tab(&host, "Price Forecasting");
    let text = host.text_content().unwrap_or_default();
    assert!(text.contains("accuracy rate for oil"), "{text}");

    click_tab(&host, "Trading Bots");
    assert_eq!(switch_state(&host, "Gold Momentum Trader").as_deref(), Some("true"));
    assert_eq!(switch_state(&host, "Oil Reversal Strategy").as_deref(), Some("false"));

    click_tab(&host, "Risk Management");
    assert_eq!(find::<HtmlInputElement>(&host, "input[type=range]").value(), "80");
    assert_eq!(switch_state(&host, "Hedging Automation").as_deref(), Some("true"));

    host.remove();
}

#[wasm_bindgen_test]
fn credential_forms_keep_their_input_across_tabs() {
    let host = mount(|| view! { <AuthenticationPage/> }.into_view());

    type_into(&host, "#login-email", "trader@example.com");
    click_tab(&host, "Sign Up");
    type_into(&host, "#signup-name", "Ada Lovelace");

    click_tab(&host, "Login");
    assert_eq!(find::<HtmlInputElement>(&host, "#login-email").value(), "trader@example.com");

    click_tab(&host, "Sign Up");
    assert_eq!(find::<HtmlInputElement>(&host, "#signup-name").value(), "Ada Lovelace");

    host.remove();
}
